use yew::prelude::*;
use crate::links::{footer_href, CONTACT_EMAIL, QUICK_LINKS, SOCIAL_URL};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1f2937;
                        color: #ffffff;
                        padding-bottom: 2.5rem;
                    }
                    .site-footer svg {
                        display: block;
                        width: 100%;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .footer-grid h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-grid a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-grid a:hover {
                        color: #60a5fa;
                    }
                    .footer-grid a.social-link {
                        color: #60a5fa;
                    }
                    .footer-grid a.social-link:hover {
                        text-decoration: underline;
                    }
                    .footer-small {
                        font-size: 0.875rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <svg viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M0 120L60 110C120 100 240 80 360 73.3C480 67 600 73 720 83.3C840 93 960 107 1080 103.7C1200 100 1320 80 1380 70L1440 60V0H1380C1320 0 1200 0 1080 0C960 0 840 0 720 0C600 0 480 0 360 0C240 0 120 0 60 0H0V120Z" fill="#1F2937"/>
            </svg>
            <div class="footer-grid">
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {
                            QUICK_LINKS.iter().map(|item| html! {
                                <li key={*item}>
                                    <a href={footer_href(item)}>{*item}</a>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div>
                    <h4>{"Connect With Us"}</h4>
                    <a href={SOCIAL_URL} class="social-link" target="_blank" rel="noopener noreferrer">
                        {"Study Bubbly's Social Media"}
                    </a>
                    <p>{format!("Questions, comments, or requests? Feel free to reach out to us at {}!", CONTACT_EMAIL)}</p>
                </div>
                <div>
                    <p class="footer-small">{"©2021 by Study Bubbly"}</p>
                    <p class="footer-small">
                        {"AP is a registered trademark by the College Board, which is not affiliated with, and does not endorse this website."}
                    </p>
                </div>
            </div>
        </footer>
    }
}
