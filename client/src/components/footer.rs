//! Page footer with contact and profile links.

use leptos::prelude::*;

use crate::content::catalog;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__brand gradient-text gradient-text--hero">{catalog::HANDLE}</p>
                <p class="footer__tagline">"Building the future, one line of code at a time."</p>
                <div class="footer__links">
                    <a href=format!("mailto:{}", catalog::FOOTER_EMAIL) class="footer__link" title="Email">
                        "✉"
                    </a>
                    <a
                        href=catalog::GITHUB_PROFILE
                        class="footer__link"
                        title="GitHub"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "GitHub"
                    </a>
                </div>
                <p class="footer__copyright">{format!("© {} · {}", catalog::FULL_NAME, catalog::ROLE)}</p>
            </div>
        </footer>
    }
}
