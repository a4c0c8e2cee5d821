//! About page

use leptos::prelude::*;

use crate::components::footer::Footer;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page">
            <main class="about">
                <div class="page-intro">
                    <h1>"About Us"</h1>
                    <p class="lead">
                        "Bridging the gap between your current skills and your dream career with AI-powered insights."
                    </p>
                </div>

                <section class="mission">
                    <div class="mission-copy">
                        <h2>"Our Mission"</h2>
                        <p>
                            "In today's competitive job market, individuals often struggle to identify the exact skill gaps preventing them from securing their desired roles."
                        </p>
                        <p>
                            "Our mission is to provide personalized, data-driven insights that help professionals bridge these gaps efficiently and accelerate their career growth."
                        </p>
                    </div>
                    <div class="callout">
                        <h3>"The Skill Gap Challenge"</h3>
                        <ul>
                            <li>"Generic career advice lacks personalization"</li>
                            <li>"Finding the right learning resources is time-consuming"</li>
                            <li>"Traditional skill development is often untargeted"</li>
                            <li>"Professionals struggle to identify which skills to prioritize"</li>
                        </ul>
                    </div>
                </section>

                <section class="how-we-help">
                    <h2>"How We Help"</h2>
                    <div class="feature-grid">
                        <div class="feature-card">
                            <h3>"AI-Powered Analysis"</h3>
                            <p>"Our advanced AI extracts skills from your resume and compares them with job requirements."</p>
                        </div>
                        <div class="feature-card">
                            <h3>"Curated Learning"</h3>
                            <p>"We recommend the best courses from platforms like Coursera and Udemy to fill your skill gaps."</p>
                        </div>
                        <div class="feature-card">
                            <h3>"Project Ideas"</h3>
                            <p>"We generate tailored project ideas to help you build a portfolio that showcases your new skills."</p>
                        </div>
                        <div class="feature-card">
                            <h3>"Career Guidance"</h3>
                            <p>"We provide job recommendations and career path insights based on your evolving skill set."</p>
                        </div>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
