use leptos::prelude::*;

/// Page being shown, with the record under edit when on the entry form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Entry {
        editing_id: Option<String>,
    },
    List,
}

impl Route {
    /// Page title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "ダッシュボード",
            Route::Entry {
                editing_id: Some(_),
            } => "売上編集",
            Route::Entry { editing_id: None } => "売上登録",
            Route::List => "売上一覧",
        }
    }

    /// Sidebar entry this route highlights
    pub fn nav_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Entry { .. } => "entry",
            Route::List => "list",
        }
    }

    pub fn edit(id: impl Into<String>) -> Self {
        Route::Entry {
            editing_id: Some(id.into()),
        }
    }
}

/// Navigation state and a revision counter bumped after every store write
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub revision: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::default()),
            revision: RwSignal::new(0),
        }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("navigate: {:?}", route);
        self.route.set(route);
    }

    /// Views that read the store re-run after this
    pub fn touch(&self) {
        self.revision.update(|r| *r += 1);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_follow_edit_mode() {
        assert_eq!(Route::Dashboard.title(), "ダッシュボード");
        assert_eq!(Route::Entry { editing_id: None }.title(), "売上登録");
        assert_eq!(Route::edit("1").title(), "売上編集");
        assert_eq!(Route::List.title(), "売上一覧");
    }

    #[test]
    fn test_entry_routes_share_nav_key() {
        assert_eq!(Route::edit("1").nav_key(), Route::Entry { editing_id: None }.nav_key());
        assert_ne!(Route::Dashboard.nav_key(), Route::List.nav_key());
    }
}
