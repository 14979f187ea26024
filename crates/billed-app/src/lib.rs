//! Billed employee application flow
//!
//! Contains the new-bill submission handler and its collaborators: the
//! injected session (who is submitting), the navigator seam (where to go
//! after success), and test doubles for the bills store.
//!
//! The handler is UI-agnostic: a thin adapter at the boundary feeds it typed
//! file selections and form values and surfaces returned errors to the user.

pub mod new_bill;
pub mod routes;
pub mod session;
pub mod test_helpers;

pub use new_bill::{NewBill, SubmissionState};
pub use routes::{Navigator, Route};
pub use session::Session;
