use crate::{
    domain::repositories::bills_repository::BillsRepository, entities::Route,
    presentation::app_context::AppContext,
};

pub struct Logout<R: BillsRepository> {
    ctx: AppContext<R>,
}

impl<R: BillsRepository> Logout<R> {
    pub fn new(ctx: AppContext<R>) -> Self {
        Self { ctx }
    }

    pub async fn handle_click_logout(&self) {
        self.ctx.session.write().await.sign_out();
        tracing::info!("user signed out");
        self.ctx.navigator.navigate(Route::Login);
    }
}
