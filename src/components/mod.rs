//! Page chrome shared by the catalog and listing pages, rendered on the
//! server with yew.

mod layout;

pub use layout::{Footer, FooterProps, Header, Layout, LayoutProps};

use yew::{BaseComponent, ServerRenderer};

/// Renders `COMP` to a complete HTML document.
pub async fn render_page<COMP>(props: COMP::Properties) -> String
where
    COMP: BaseComponent,
    COMP::Properties: Send,
{
    let body = ServerRenderer::<COMP>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;
    format!("<!DOCTYPE html>\n{}", body)
}
