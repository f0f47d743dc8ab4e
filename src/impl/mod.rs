// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod bill_status_model;
        pub(crate) mod form_number_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod collaborators;
        pub(crate) mod receipt;
        pub(crate) mod route;
        pub(crate) mod session;
    }
    pub(crate) mod logic {
        pub(crate) mod bill_decorator;
        pub(crate) mod formatter;
        pub(crate) mod receipt_pdf;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod get_bills_usecase;
        pub(crate) mod submit_bill_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod app_context;
    pub(crate) mod containers {
        pub(crate) mod bills;
        pub(crate) mod logout;
        pub(crate) mod new_bill;
    }
    pub(crate) mod router;
    pub(crate) mod utils;
    pub(crate) mod views {
        pub(crate) mod actions;
        pub(crate) mod bills_ui;
        pub(crate) mod icons;
        pub(crate) mod login_ui;
        pub(crate) mod new_bill_ui;
        pub(crate) mod status_pages;
        pub(crate) mod vertical_layout;
    }
}

#[cfg(test)]
pub(crate) mod test_support;

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::collaborators::*;
        pub use crate::domain::entities::receipt::*;
        pub use crate::domain::entities::route::*;
        pub use crate::domain::entities::session::*;
    }

    pub mod store {
        pub use crate::data::repositories::bills_repository_impl::LocalBillsStore;
        pub use crate::domain::repositories::bills_repository::BillsRepository;
        pub use crate::domain::usecases::submit_bill_usecase::StoredReceipt;
    }

    pub mod formatter {
        pub use crate::domain::logic::formatter::{format_date, format_status, status_label};
    }

    pub mod views {
        pub use crate::presentation::views::actions::actions;
        pub use crate::presentation::views::bills_ui::{bills_ui, BillsPage};
        pub use crate::presentation::views::login_ui::login_ui;
        pub use crate::presentation::views::new_bill_ui::new_bill_ui;
        pub use crate::presentation::views::status_pages::{error_page, loading_page};
        pub use crate::presentation::views::vertical_layout::{vertical_layout, ActiveIcon};
    }

    pub mod app {
        pub use crate::presentation::app_context::AppContext;
        pub use crate::presentation::containers::bills::{BillsContainer, BillsEvent};
        pub use crate::presentation::containers::logout::Logout;
        pub use crate::presentation::containers::new_bill::NewBillContainer;
        pub use crate::presentation::router::{Page, Router};
    }
}
