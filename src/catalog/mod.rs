//! The browse page: hard-coded featured and recent courses plus a
//! department picker.
//!
//! Page state is a plain value. Requests are turned into a sequence of
//! [`CatalogEvent`]s that are folded into a [`CatalogState`], and the state
//! is projected into a [`CatalogViewModel`] for rendering.

pub mod fixtures;
pub mod render;

use tracing::debug;

use crate::models::{Course, Department};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogView {
    #[default]
    Featured,
    Recent,
    Departments,
}

impl CatalogView {
    pub const ALL: [CatalogView; 3] = [CatalogView::Featured, CatalogView::Recent, CatalogView::Departments];

    pub fn key(self) -> &'static str {
        match self {
            CatalogView::Featured => "featured",
            CatalogView::Recent => "recent",
            CatalogView::Departments => "departments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogView::Featured => "Featured",
            CatalogView::Recent => "Recent Uploads",
            CatalogView::Departments => "Departments",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        CatalogView::ALL.into_iter().find(|v| v.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    QueryChanged(String),
    DepartmentSelected(Department),
    ViewSelected(CatalogView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub query: String,
    pub selected_department: Option<Department>,
    pub view: CatalogView,
}

impl CatalogState {
    pub fn apply(self, event: CatalogEvent) -> Self {
        match event {
            CatalogEvent::QueryChanged(query) => Self { query, ..self },
            CatalogEvent::DepartmentSelected(dept) => Self {
                selected_department: Some(dept),
                ..self
            },
            CatalogEvent::ViewSelected(view) => Self { view, ..self },
        }
    }

    pub fn from_events(events: impl IntoIterator<Item = CatalogEvent>) -> Self {
        events.into_iter().fold(Self::default(), Self::apply)
    }
}

/// Query string accepted by the catalog routes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub department: Option<String>,
    pub tab: Option<String>,
}

impl CatalogQuery {
    /// Parses a raw query string. The last value of a repeated key wins,
    /// unknown keys are skipped, and an undecodable string yields the
    /// default query.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => pairs,
            Err(e) => {
                debug!("ignoring catalog query {:?}: {}", raw, e);
                return Self::default();
            }
        };
        pairs.into_iter().fold(Self::default(), |mut query, (key, value)| {
            match key.as_str() {
                "q" => query.q = Some(value),
                "department" => query.department = Some(value),
                "tab" => query.tab = Some(value),
                _ => {}
            }
            query
        })
    }

    /// Unknown tabs and departments are dropped rather than rejected.
    pub fn into_events(self) -> Vec<CatalogEvent> {
        let mut events = Vec::new();
        if let Some(q) = self.q {
            events.push(CatalogEvent::QueryChanged(q));
        }
        if let Some(name) = self.department.filter(|d| !d.is_empty()) {
            match name.parse::<Department>() {
                Ok(dept) => events.push(CatalogEvent::DepartmentSelected(dept)),
                Err(e) => debug!("ignoring department selection: {}", e),
            }
        }
        if let Some(view) = self.tab.as_deref().and_then(CatalogView::from_key) {
            events.push(CatalogEvent::ViewSelected(view));
        }
        events
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub badge: &'static str,
    pub title: String,
    pub code: String,
    pub updated: String,
    pub href: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            badge: course.department.name(),
            title: course.name.clone(),
            code: course.code.clone(),
            updated: course.last_updated.format("%Y-%m-%d").to_string(),
            href: course.href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCard {
    pub department: Department,
    pub href: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPanel {
    Courses(Vec<CourseCard>),
    Departments(Vec<DepartmentCard>),
}

impl CatalogPanel {
    pub fn len(&self) -> usize {
        match self {
            CatalogPanel::Courses(cards) => cards.len(),
            CatalogPanel::Departments(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub query: String,
    pub selected_department: Option<Department>,
    pub active_view: CatalogView,
    pub panel: CatalogPanel,
}

/// Owns the sample course lists shown on the browse page.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    featured: Vec<Course>,
    recent: Vec<Course>,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new(fixtures::featured_courses(), fixtures::recent_uploads())
    }
}

impl CatalogPage {
    pub fn new(featured: Vec<Course>, recent: Vec<Course>) -> Self {
        Self { featured, recent }
    }

    // The search query is carried in state but does not filter either list.
    pub fn view_model(&self, state: &CatalogState) -> CatalogViewModel {
        let panel = match state.view {
            CatalogView::Featured => CatalogPanel::Courses(self.featured.iter().map(CourseCard::from).collect()),
            CatalogView::Recent => CatalogPanel::Courses(self.recent.iter().map(CourseCard::from).collect()),
            CatalogView::Departments => CatalogPanel::Departments(
                Department::ALL
                    .into_iter()
                    .map(|department| DepartmentCard {
                        department,
                        href: department.href(),
                        highlighted: state.selected_department == Some(department),
                    })
                    .collect(),
            ),
        };

        CatalogViewModel {
            query: state.query.clone(),
            selected_department: state.selected_department,
            active_view: state.view,
            panel,
        }
    }

    pub async fn render(&self, state: &CatalogState, year: i32) -> String {
        render::render_catalog(self.view_model(state), year).await
    }
}
