use maud::html;

/// Sign-in page. Authentication itself happens outside this crate; the page
/// is only the landing spot after logout.
pub fn login_ui() -> String {
    html! {
        div class="login-page" {
            div class="login-title" { "Billed" }
            div class="login-forms" {
                form data-testid="form-employee" {
                    h2 { "Employé" }
                    label for="employee-email-input" { "Votre email" }
                    input type="email" data-testid="employee-email-input" placeholder="johndoe@email.com" required;
                    label for="employee-password-input" { "Mot de passe" }
                    input type="password" data-testid="employee-password-input" placeholder="******" required;
                    button type="submit" data-testid="employee-login-button" class="btn btn-primary" { "Se connecter" }
                }
            }
        }
    }
    .into_string()
}
