use iced::widget::{container, image, mouse_area, text, Row};
use iced::{Alignment, Element, Length};

use crate::assets::AssetStore;
use crate::state::catalog::PageCatalog;
use crate::state::drawer::DrawerState;
use crate::Message;

/// Display width of a drawer thumbnail
const THUMBNAIL_WIDTH: f32 = 80.0;

/// Drawer handle plus the thumbnail strip, anchored to the top-right corner
///
/// The chevron always stays visible as the drawer handle; the thumbnails are
/// only part of the tree while the drawer is open.
pub fn drawer_panel(
    catalog: &PageCatalog,
    drawer: DrawerState,
    assets: &AssetStore,
) -> Element<'static, Message> {
    let chevron = if drawer.is_open { "❯" } else { "❮" };
    let handle = mouse_area(text(chevron).size(28)).on_press(Message::ToggleDrawer);

    let mut strip = Row::new().spacing(12).align_y(Alignment::Center).push(handle);

    if drawer.is_open {
        for page in catalog.pages() {
            let thumbnail: Element<'static, Message> =
                match assets.get(&page.thumbnail_asset()) {
                    Some(asset) => image(asset.handle.clone())
                        .width(Length::Fixed(THUMBNAIL_WIDTH))
                        .into(),
                    None => text("…").size(24).into(),
                };

            strip = strip.push(mouse_area(thumbnail).on_press(Message::PageSelected(page.id)));
        }
    }

    container(strip).padding(10).into()
}
