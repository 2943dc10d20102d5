pub mod banner;
pub mod detail_view;
pub mod list;
pub mod panel;
pub mod popup;

pub use banner::{Banner, BannerVariant};
pub use detail_view::{bullet_lines, section_header};
pub use list::{styled_list_item, ListItemConfig};
pub use panel::PanelConfig;
pub use popup::{centered_rect, render_popup_with_block};
