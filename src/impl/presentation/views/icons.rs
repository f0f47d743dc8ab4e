pub(crate) const WINDOW_ICON: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="24" height="20" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><line x1="4" y1="12" x2="28" y2="12" stroke="currentColor" stroke-width="2"/></svg>"##;

pub(crate) const MAIL_ICON: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="8" width="24" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><polyline points="4,8 16,18 28,8" fill="none" stroke="currentColor" stroke-width="2"/></svg>"##;

pub(crate) const DISCONNECT_ICON: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><path d="M12 6H6v20h6M20 10l6 6-6 6M26 16H12" fill="none" stroke="currentColor" stroke-width="2"/></svg>"##;

pub(crate) const EYE_BLUE_ICON: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M1 12s4-7 11-7 11 7 11 7-4 7-11 7S1 12 1 12z" fill="none" stroke="#0E5AE5" stroke-width="2"/><circle cx="12" cy="12" r="3" fill="#0E5AE5"/></svg>"##;

pub(crate) const DOWNLOAD_BLUE_ICON: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M12 3v12M7 10l5 5 5-5M4 20h16" fill="none" stroke="#0E5AE5" stroke-width="2"/></svg>"##;
