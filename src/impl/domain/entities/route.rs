use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" | "login" => Ok(Route::Login),
            "#employee/bills" | "bills" => Ok(Route::Bills),
            "#employee/bill/new" | "new-bill" => Ok(Route::NewBill),
            "#admin/dashboard" | "dashboard" => Ok(Route::Dashboard),
            other => Err(format!("unknown route '{other}'")),
        }
    }
}
