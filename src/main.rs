use cgmath::Vector2;
use iced::widget::{canvas, container, stack, text, Container};
use iced::{alignment, Element, Length, Size, Task, Theme};

// Declare the application modules
mod assets;
mod state;
mod ui;

use assets::{AssetStore, LoadResult, LoadedAsset};
use state::catalog::PageCatalog;
use state::drawer::DrawerState;
use state::transform::TransformState;

/// Main application state
struct PinchViewer {
    /// The fixed page catalog
    catalog: PageCatalog,
    /// Zoom/pan state of the displayed page
    transform: TransformState,
    /// Drawer visibility and page selection
    drawer: DrawerState,
    /// Decoded page bitmaps and thumbnails
    assets: AssetStore,
    /// Whether the info panel readout is shown
    info_panel_visible: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (gesture events plus async results)
#[derive(Debug, Clone)]
enum Message {
    /// Background asset decoding finished
    AssetsLoaded(LoadResult),
    /// Double tap (double click) on the page
    DoubleTapped,
    /// Drag moved; carries the total translation since the drag began
    DragChanged(Vector2<f32>),
    /// Drag gesture ended
    DragEnded,
    /// Pinch changed; carries the raw gesture magnification
    MagnifyChanged(f32),
    /// Pinch gesture ended
    MagnifyEnded,
    /// Zoom-in button pressed
    ZoomIn,
    /// Zoom-out button pressed
    ZoomOut,
    /// Reset button pressed
    ResetZoom,
    /// Drawer handle pressed
    ToggleDrawer,
    /// Drawer thumbnail pressed; carries the page id
    PageSelected(usize),
    /// Info panel hotspot pressed
    ToggleInfoPanel,
}

impl PinchViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = PageCatalog::builtin();
        println!("📖 Pinch viewer initialized with {} pages", catalog.count());

        let status = format!("Loading {} pages...", catalog.count());
        let pages = catalog.pages().to_vec();

        (
            PinchViewer {
                catalog,
                transform: TransformState::default(),
                drawer: DrawerState::default(),
                assets: AssetStore::default(),
                info_panel_visible: false,
                status,
            },
            Task::perform(assets::load_assets(pages), Message::AssetsLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AssetsLoaded(result) => {
                if result.missing.is_empty() {
                    self.status = format!("Ready. {} pages.", self.catalog.count());
                } else {
                    self.status =
                        format!("Ready. Missing assets: {}", result.missing.join(", "));
                }
                self.assets = result.store;
            }

            Message::DoubleTapped => self.transform = self.transform.on_double_tap(),
            Message::DragChanged(translation) => {
                self.transform = self.transform.on_drag_changed(translation)
            }
            Message::DragEnded => self.transform = self.transform.on_drag_ended(),
            Message::MagnifyChanged(magnification) => {
                self.transform = self.transform.on_magnify_changed(magnification)
            }
            Message::MagnifyEnded => self.transform = self.transform.on_magnify_ended(),
            Message::ZoomIn => self.transform = self.transform.zoom_in(),
            Message::ZoomOut => self.transform = self.transform.zoom_out(),
            Message::ResetZoom => self.transform = TransformState::reset(),

            Message::ToggleDrawer => self.drawer = self.drawer.toggle(),
            Message::PageSelected(page_id) => {
                self.drawer = self.drawer.select_page(page_id);
                // Each page starts from an untouched transform
                self.transform = TransformState::default();
            }

            Message::ToggleInfoPanel => self.info_panel_visible = !self.info_panel_visible,
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page_canvas = canvas(ui::canvas::PageCanvas {
            asset: self.current_page_asset().cloned(),
            transform: self.transform,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        stack![
            page_canvas,
            overlay(ui::info_panel::info_panel(
                self.transform,
                self.info_panel_visible
            ))
            .align_y(alignment::Vertical::Top),
            overlay(ui::drawer::drawer_panel(
                &self.catalog,
                self.drawer,
                &self.assets
            ))
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top),
            overlay(ui::controls::control_bar())
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom),
            overlay(text(&self.status).size(12)).align_y(alignment::Vertical::Bottom),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Decoded bitmap of the currently selected page
    ///
    /// A selection the catalog rejects (a contract violation by the shell)
    /// degrades to the loading placeholder instead of tearing the app down.
    fn current_page_asset(&self) -> Option<&LoadedAsset> {
        let page = self.catalog.page_at(self.drawer.selected_page).ok()?;
        self.assets.get(&page.image_asset)
    }
}

/// Full-size transparent container used to pin an overlay to a window edge
fn overlay<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(8)
}

fn main() -> iced::Result {
    iced::application("Pinch & Zoom", PinchViewer::update, PinchViewer::view)
        .theme(PinchViewer::theme)
        .window_size(Size::new(540.0, 860.0))
        .centered()
        .run_with(PinchViewer::new)
}
