use std::sync::Arc;

use fractic_server_error::ServerError;
use tokio::sync::{mpsc::UnboundedReceiver, Mutex};

use crate::{
    domain::repositories::bills_repository::BillsRepository,
    entities::Route,
    presentation::{
        app_context::AppContext,
        containers::{bills::BillsContainer, logout::Logout, new_bill::NewBillContainer},
        views::{
            bills_ui::{bills_ui, BillsPage},
            login_ui::login_ui,
            new_bill_ui::new_bill_ui,
        },
    },
};

/// The page currently on screen, with the container handling its events.
pub enum Page<R: BillsRepository> {
    Login,
    Bills(Arc<BillsContainer<R>>),
    NewBill(Arc<NewBillContainer<R>>),
}

impl<R: BillsRepository> Clone for Page<R> {
    fn clone(&self) -> Self {
        match self {
            Page::Login => Page::Login,
            Page::Bills(c) => Page::Bills(c.clone()),
            Page::NewBill(c) => Page::NewBill(c.clone()),
        }
    }
}

impl<R: BillsRepository> Page<R> {
    pub fn route(&self) -> Route {
        match self {
            Page::Login => Route::Login,
            Page::Bills(_) => Route::Bills,
            Page::NewBill(_) => Route::NewBill,
        }
    }
}

pub struct Router<R: BillsRepository> {
    ctx: AppContext<R>,
    logout: Logout<R>,
    current: Mutex<Option<Page<R>>>,
}

impl<R: BillsRepository> Router<R> {
    pub fn new(ctx: AppContext<R>) -> Self {
        Self {
            logout: Logout::new(ctx.clone()),
            ctx,
            current: Mutex::new(None),
        }
    }

    /// Renders `route` and makes it the current page.
    ///
    /// The bills page is painted twice: a loading state first, then either the
    /// bill table or the error page once the store answered. A store failure
    /// is therefore not an error here, it is what the user sees.
    pub async fn navigate(&self, route: Route) -> Result<Page<R>, ServerError> {
        tracing::info!(%route, "navigating");
        let page = match route {
            Route::Bills => {
                self.ctx.ui.render_root(&bills_ui(BillsPage::Loading));
                let container = Arc::new(BillsContainer::new(self.ctx.clone()));
                match container.get_bills().await {
                    Ok(bills) => self.ctx.ui.render_root(&bills_ui(BillsPage::Data(&bills))),
                    Err(e) => {
                        tracing::error!(error = %e, "could not load bills");
                        self.ctx
                            .ui
                            .render_root(&bills_ui(BillsPage::Error(&e.to_string())));
                    }
                }
                Page::Bills(container)
            }
            Route::NewBill => {
                let container = Arc::new(NewBillContainer::new(self.ctx.clone())?);
                self.ctx.ui.render_root(&new_bill_ui());
                Page::NewBill(container)
            }
            // The admin dashboard is not part of the employee front end.
            Route::Login | Route::Dashboard => {
                self.ctx.ui.render_root(&login_ui());
                Page::Login
            }
        };
        *self.current.lock().await = Some(page.clone());
        Ok(page)
    }

    pub async fn current(&self) -> Option<Page<R>> {
        self.current.lock().await.clone()
    }

    pub fn logout(&self) -> &Logout<R> {
        &self.logout
    }

    /// Follows routes sent by the containers until every sender is dropped.
    pub async fn run(&self, mut routes: UnboundedReceiver<Route>) -> Result<(), ServerError> {
        while let Some(route) = routes.recv().await {
            self.navigate(route).await?;
        }
        Ok(())
    }
}
