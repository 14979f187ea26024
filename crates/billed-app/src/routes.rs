//! Logical routes and the navigation seam
//!
//! The handler never renders views; after a successful submission it asks
//! the injected `Navigator` to move to the bill list. Test doubles record
//! the calls instead of rendering anything.

/// Logical views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// Pathname of the route, as served by the front-end router.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "/#employee/bills",
            Route::NewBill => "/#employee/bill/new",
            Route::Dashboard => "/#admin/dashboard",
        }
    }

    /// Title rendered at the top of the corresponding view.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Billed",
            Route::Bills => "Mes notes de frais",
            Route::NewBill => "Envoyer une note de frais",
            Route::Dashboard => "Validations",
        }
    }
}

/// Maps a logical route to a rendered view. Implemented by the real router
/// at the UI boundary and by recording doubles in tests.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
