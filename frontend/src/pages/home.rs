use yew::prelude::*;
use crate::components::bubble_container::BubbleContainer;
use crate::components::footer::Footer;

const TESTIMONIALS: [(&str, &str); 2] = [
    ("Study Bubbly's resources were a lifesaver during my AP exams! The notes were concise and easy to understand.", "Sophie R., California"),
    ("I loved the collaborative study sessions on Discord. It felt like I wasn't alone!", "Jamal K., New York"),
];

const ROLES: [(&str, &str, &str); 3] = [
    ("📖", "Note Writer", "Help us build a collection of accurate, high-quality notes."),
    ("👥", "Tutor", "Share your knowledge and offer one-on-one support."),
    ("🔗", "Community Outreach", "Help expand our reach to more students."),
];

const GUIDES: [(&str, &str); 3] = [
    ("AP Biology", "Explore comprehensive notes on cell structure, genetics, and more!"),
    ("AP US History", "Key events and movements that shaped the United States, summarized!"),
    ("AP Psychology", "From brain anatomy to behavioral theories, get the info you need."),
];

const STEPS: [(&str, &str, &str); 3] = [
    ("🔍", "1. Explore Our Library", "Use our categorized search to find notes for your class."),
    ("👥", "2. Join the Community", "Attend live study sessions on our Discord server."),
    ("🔗", "3. Share & Collaborate", "Contribute your own notes and insights to help others."),
];

const REASONS: [(&str, &str); 3] = [
    ("Free & Accessible", "Our resources are 100% free for every student."),
    ("Student-Led & Trusted", "All our content is created and reviewed by top-performing high school students."),
    ("Comprehensive & Up-to-Date", "We're always updating our materials to reflect the latest AP curriculum."),
];

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: &'static str,
    intro: &'static str,
    #[prop_or_default]
    shaded: bool,
    #[prop_or_default]
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("content-section", props.shaded.then(|| "shaded"))}>
            <div class="container">
                <h2 class="section-title">{props.title}</h2>
                <p class="section-intro">{props.intro}</p>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <BubbleContainer />
                <div class="container hero-content">
                    <h2 class="hero-rise" style="animation-delay: 0s;">
                        {"Study Bubbly: A study resource for everything AP."}
                    </h2>
                    <p class="hero-tagline hero-rise" style="animation-delay: 0.2s;">
                        {"study smart. tutor together. ace APs."}
                    </p>
                    <div class="hero-rise" style="animation-delay: 0.4s;">
                        <button class="btn btn-yellow btn-lg">{"Take me to the notes!"}</button>
                    </div>
                </div>
                <svg class="hero-wave" viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M0 0L60 10C120 20 240 40 360 46.7C480 53 600 47 720 36.7C840 27 960 13 1080 16.3C1200 20 1320 40 1380 50L1440 60V120H1380C1320 120 1200 120 1080 120C960 120 840 120 720 120C600 120 480 120 360 120C240 120 120 120 60 120H0V0Z" fill="white"/>
                </svg>
            </section>

            <section class="content-section">
                <div class="container">
                    <h2 class="section-title">{"About Us"}</h2>
                    <blockquote class="founder-quote">
                        {"\"Sometimes you have to take risks\" - Vincent Yang (Founder)"}
                    </blockquote>
                    <p class="section-body">
                        {"Study Bubbly was founded during the Covid-19 pandemic with several friends, each in a different state. Despite initial doubts, countless hours of effort made this success possible. Now, Study Bubbly is completely led by high school volunteers and aims to provide free, high-quality AP resources nationwide and abroad."}
                    </p>
                </div>
            </section>

            <Section
                title="Our Success Stories"
                intro="We're proud of the impact we've made on students nationwide! From mastering AP Calculus to acing AP Literature, here's what students have to say about Study Bubbly."
                shaded={true}
            >
                <div class="grid grid-2">
                    {
                        TESTIMONIALS.iter().map(|(quote, who)| html! {
                            <div class="card">
                                <p class="card-text">{format!("\"{}\"", quote)}</p>
                                <p class="card-author">{format!("- {}", who)}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-cta">
                    <button class="btn btn-blue btn-lg">{"Read More Testimonials"}</button>
                </div>
            </Section>

            <Section
                title="Get Involved with Study Bubbly"
                intro="Whether you want to contribute notes, become a tutor, or help manage our social media, there's always a role for you! Join a team of passionate students and help make learning accessible to everyone."
            >
                <div class="grid grid-3">
                    {
                        ROLES.iter().map(|(icon, title, text)| html! {
                            <div class="card centered">
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="card-text">{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-cta">
                    <button class="btn btn-yellow btn-lg">{"See Open Positions"}</button>
                </div>
            </Section>

            <Section
                title="Featured Study Guides"
                intro="Don't know where to start? Check out some of our most popular study guides for AP classes."
                shaded={true}
            >
                <div class="grid grid-3">
                    {
                        GUIDES.iter().map(|(title, text)| html! {
                            <div class="card">
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-cta">
                    <button class="btn btn-blue btn-lg">{"View All Study Guides"}</button>
                </div>
            </Section>

            <Section
                title="How Study Bubbly Works"
                intro="We make it simple to find the resources you need."
            >
                <div class="grid grid-3">
                    {
                        STEPS.iter().map(|(icon, title, text)| html! {
                            <div class="centered">
                                <div class="card-icon large">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="card-text">{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section
                title="Why Choose Study Bubbly?"
                intro="There are countless study resources out there, but here's why Study Bubbly is different:"
                shaded={true}
            >
                <div class="grid grid-3">
                    {
                        REASONS.iter().map(|(title, text)| html! {
                            <div class="card centered">
                                <div class="card-icon">{"✅"}</div>
                                <h3>{*title}</h3>
                                <p class="card-text">{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-cta">
                    <button class="btn btn-blue btn-lg">{"Learn More About Us"}</button>
                </div>
            </Section>

            <Section
                title="Join Our Community!"
                intro="Want to study smarter and connect with like-minded peers? Join our Discord server where you can attend study sessions, ask for help, and even host your own events!"
            >
                <div class="section-cta">
                    <button class="btn btn-indigo btn-lg">{"Join the Discord Community"}</button>
                </div>
            </Section>

            <Footer />

            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #ffffff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .hero {
                        position: relative;
                        padding: 8rem 0 5rem;
                        background: linear-gradient(to bottom right, #60a5fa, #a855f7);
                        color: #ffffff;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .hero-content h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .hero-tagline {
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .hero-rise {
                        opacity: 0;
                        animation: hero-rise 0.8s ease-out forwards;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-wave {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                    }
                    .content-section {
                        padding: 5rem 0;
                    }
                    .content-section.shaded {
                        background: #f3f4f6;
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 2rem;
                        color: #1e40af;
                    }
                    .section-intro {
                        font-size: 1.125rem;
                        text-align: center;
                        margin-bottom: 3rem;
                        color: #374151;
                    }
                    .section-body {
                        font-size: 1.125rem;
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto;
                        color: #374151;
                    }
                    .founder-quote {
                        font-size: 1.5rem;
                        font-style: italic;
                        text-align: center;
                        margin-bottom: 2rem;
                        color: #4b5563;
                    }
                    .grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .card {
                        background: #ffffff;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .centered {
                        text-align: center;
                    }
                    .card-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .card-icon.large {
                        font-size: 4rem;
                    }
                    .card h3, .centered h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .card-title {
                        color: #2563eb;
                    }
                    .card-text {
                        color: #374151;
                        margin-bottom: 1rem;
                    }
                    .card-author {
                        font-weight: 600;
                        color: #2563eb;
                    }
                    .section-cta {
                        text-align: center;
                    }
                    .btn {
                        border: 1px solid transparent;
                        border-radius: 0.375rem;
                        padding: 0.5rem 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background-color 0.2s;
                    }
                    .btn-lg {
                        padding: 0.75rem 2rem;
                        font-size: 1.125rem;
                    }
                    .btn-yellow {
                        background: #facc15;
                        color: #1e40af;
                    }
                    .btn-yellow:hover {
                        background: #eab308;
                    }
                    .btn-outline {
                        border-color: #eab308;
                    }
                    .btn-blue {
                        background: #2563eb;
                        color: #ffffff;
                    }
                    .btn-blue:hover {
                        background: #1d4ed8;
                    }
                    .btn-indigo {
                        background: #4f46e5;
                        color: #ffffff;
                    }
                    .btn-indigo:hover {
                        background: #4338ca;
                    }
                    @media (min-width: 768px) {
                        .hero-content h2 {
                            font-size: 3rem;
                        }
                        .grid-2 {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .grid-3 {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
