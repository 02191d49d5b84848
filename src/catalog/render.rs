use serde::Serialize;
use yew::prelude::*;

use crate::components::{Layout, render_page};
use crate::models::Department;

use super::{CatalogPanel, CatalogView, CatalogViewModel, CourseCard, DepartmentCard};

pub async fn render_catalog(vm: CatalogViewModel, year: i32) -> String {
    render_page::<CatalogDocument>(CatalogDocumentProps { vm, year }).await
}

#[derive(Serialize)]
struct TabParams<'a> {
    tab: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<&'a str>,
}

/// Link to `view` that keeps the current search and department selection.
pub fn tab_href(view: CatalogView, query: &str, selected: Option<Department>) -> String {
    let params = TabParams {
        tab: view.key(),
        q: query,
        department: selected.map(Department::name),
    };
    // Only nested values fail to encode.
    match serde_urlencoded::to_string(&params) {
        Ok(qs) => format!("/?{}", qs),
        Err(_) => format!("/?tab={}", view.key()),
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogDocumentProps {
    pub vm: CatalogViewModel,
    pub year: i32,
}

#[function_component(CatalogDocument)]
pub fn catalog_document(props: &CatalogDocumentProps) -> Html {
    let vm = &props.vm;

    let panel = match &vm.panel {
        CatalogPanel::Courses(cards) => html! {
            <div class="course-grid">
                { for cards.iter().map(|card| html! { <CourseCardItem key={card.href.clone()} card={card.clone()} /> }) }
            </div>
        },
        CatalogPanel::Departments(cards) => html! {
            <>
                <DepartmentSelect query={vm.query.clone()} selected={vm.selected_department} />
                <div class="department-grid">
                    { for cards.iter().map(|card| html! { <DepartmentCardItem key={card.href.clone()} card={card.clone()} /> }) }
                </div>
            </>
        },
    };

    html! {
        <Layout title="UISyllabi" year={props.year}>
            <Hero query={vm.query.clone()} />
            <section class="catalog">
                <Tabs active={vm.active_view} query={vm.query.clone()} selected={vm.selected_department} />
                <div class="tab-content" data-view={vm.active_view.key()}>
                    { panel }
                </div>
            </section>
            <CallToAction />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub query: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <h2>{ "Find Your Course Syllabus" }</h2>
            <p>
                { "Access syllabuses for University of Iowa courses in one convenient location. Plan your semester with confidence." }
            </p>
            <form class="search" method="get" action="/">
                <input
                    type="text"
                    name="q"
                    placeholder="Search by course name or code..."
                    value={props.query.clone()}
                />
                <button type="submit">{ "Search" }</button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub active: CatalogView,
    pub query: String,
    pub selected: Option<Department>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <nav class="tabs">
            { for CatalogView::ALL.into_iter().map(|view| html! {
                <a
                    key={view.key()}
                    class={classes!("tab", (view == props.active).then_some("active"))}
                    href={tab_href(view, &props.query, props.selected)}
                >
                    { view.label() }
                </a>
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub card: CourseCard,
}

#[function_component(CourseCardItem)]
pub fn course_card_item(props: &CourseCardProps) -> Html {
    let card = &props.card;
    html! {
        <article class="course-card">
            <span class="badge">{ card.badge }</span>
            <h3>{ card.title.clone() }</h3>
            <p class="code">{ card.code.clone() }</p>
            <p class="updated">{ format!("Updated: {}", card.updated) }</p>
            <a href={card.href.clone()}>{ "View Syllabus" }</a>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct DepartmentSelectProps {
    pub query: String,
    pub selected: Option<Department>,
}

#[function_component(DepartmentSelect)]
pub fn department_select(props: &DepartmentSelectProps) -> Html {
    html! {
        <form class="department-select" method="get" action="/">
            <input type="hidden" name="tab" value="departments" />
            if !props.query.is_empty() {
                <input type="hidden" name="q" value={props.query.clone()} />
            }
            <select name="department">
                <option value="" selected={props.selected.is_none()}>{ "Select a department" }</option>
                { for Department::ALL.into_iter().map(|dept| html! {
                    <option key={dept.slug()} value={dept.name()} selected={props.selected == Some(dept)}>
                        { dept.name() }
                    </option>
                }) }
            </select>
            <button type="submit">{ "Go" }</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct DepartmentCardProps {
    pub card: DepartmentCard,
}

#[function_component(DepartmentCardItem)]
pub fn department_card_item(props: &DepartmentCardProps) -> Html {
    let card = &props.card;
    html! {
        <a class={classes!("department-card", card.highlighted.then_some("selected"))} href={card.href.clone()}>
            { card.department.name() }
        </a>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <h3>{ "Have a syllabus to share?" }</h3>
            <p>
                { "Help your fellow Hawkeyes by uploading course syllabuses. Together we can build a comprehensive resource for the UI community." }
            </p>
            <a class="button" href="/upload">{ "Upload Syllabus" }</a>
        </section>
    }
}
