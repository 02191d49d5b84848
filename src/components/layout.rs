use yew::prelude::*;

use crate::models::Department;

/// Departments shown in the header's dropdown menu.
const NAV_DEPARTMENTS: usize = 8;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub title: String,
    pub year: i32,
    #[prop_or_default]
    pub children: Html,
}

/// Document shell: head, header navigation, page body and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{ props.title.clone() }</title>
            </head>
            <body>
                <main class="page">
                    <Header />
                    { props.children.clone() }
                    <Footer year={props.year} />
                </main>
            </body>
        </html>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="brand">
                <span class="mark">{ "UI" }</span>
                <h1>{ "UISyllabi" }</h1>
            </div>
            <nav>
                <ul>
                    <li><a href="/">{ "Home" }</a></li>
                    <li class="menu">
                        <span>{ "Departments" }</span>
                        <ul class="menu-content">
                            { for Department::ALL.iter().take(NAV_DEPARTMENTS).map(|dept| html! {
                                <li key={dept.slug()}><a href={dept.href()}>{ dept.name() }</a></li>
                            }) }
                            <li class="view-all"><a href="/departments">{ "View All Departments →" }</a></li>
                        </ul>
                    </li>
                    <li><a href="/upload">{ "Upload Syllabus" }</a></li>
                    <li><a href="/about">{ "About" }</a></li>
                </ul>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="brand">
                <span class="mark">{ "UI" }</span>
                <h2>{ "UISyllabi" }</h2>
            </div>
            <p>{ "A student-driven initiative to make University of Iowa course materials more accessible." }</p>
            <div class="footer-nav">
                <h4>{ "Navigation" }</h4>
                <ul>
                    <li><a href="/">{ "Home" }</a></li>
                    <li><a href="/departments">{ "Departments" }</a></li>
                    <li><a href="/upload">{ "Upload" }</a></li>
                    <li><a href="/about">{ "About Us" }</a></li>
                </ul>
            </div>
            <div class="footer-contact">
                <h4>{ "Contact" }</h4>
                <ul>
                    <li>{ "uisyllabi@uiowa.edu" }</li>
                    <li>{ "Iowa City, IA" }</li>
                </ul>
            </div>
            <p class="copyright">
                { format!("© {} UISyllabi. Not an official University of Iowa website.", props.year) }
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_page;

    #[tokio::test]
    async fn test_header_lists_first_eight_departments() {
        let html = render_page::<Header>(()).await;
        for dept in &Department::ALL[..NAV_DEPARTMENTS] {
            assert!(html.contains(&format!("href=\"{}\"", dept.href())), "missing {}", dept);
        }
        assert!(!html.contains(&Department::History.href()));
        assert!(html.contains("href=\"/departments\""));
        assert!(html.contains("href=\"/upload\""));
        assert!(html.contains("href=\"/about\""));
    }

    #[tokio::test]
    async fn test_footer_year() {
        let html = render_page::<Footer>(FooterProps { year: 2025 }).await;
        assert!(html.contains("© 2025 UISyllabi."));
        assert!(html.contains("uisyllabi@uiowa.edu"));
    }

    #[tokio::test]
    async fn test_page_is_a_document() {
        let html = render_page::<Footer>(FooterProps { year: 2025 }).await;
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(!html.contains("<!--"));
    }
}
