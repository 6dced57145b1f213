//! Portfolio content panels hosted inside desktop windows.
//!
//! Panels are plain Leptos components. They report back to the shell only through the
//! [`PanelHost`] callbacks, so the window manager never inspects their markup.

pub mod contact;
pub mod content;

use std::time::Duration;

use desktop_app_contract::{AppId, PanelHost, ShellError, SoundCue};
use leptos::*;

pub use contact::{is_valid_email, ContactForm, ContactFormError};

/// Delay before skill bars grow to their value.
const SKILL_BAR_DELAY: Duration = Duration::from_millis(100);

/// Renders the panel body for a windowed portfolio app, or `None` when `app_id` has no panel.
pub fn render_panel(app_id: &AppId, host: PanelHost) -> Option<View> {
    let view = match app_id.as_str() {
        "about" => view! { <AboutPanel/> }.into_view(),
        "projects" => view! { <ProjectsPanel host=host/> }.into_view(),
        "skills" => view! { <SkillsPanel/> }.into_view(),
        "contact" => view! { <ContactPanel host=host/> }.into_view(),
        "education" => view! { <EducationPanel/> }.into_view(),
        "social" => view! { <SocialPanel host=host/> }.into_view(),
        "resume" => view! { <ResumePanel host=host/> }.into_view(),
        _ => return None,
    };
    Some(view)
}

#[component]
pub fn AboutPanel() -> impl IntoView {
    view! {
        <div class="panel-about">
            <h3>"About Me"</h3>
            <div class="profile-container">
                <div class="profile-image">
                    <i class="fas fa-user"></i>
                </div>
                <div class="profile-text">
                    {content::ABOUT_PARAGRAPHS
                        .into_iter()
                        .map(|text| view! { <p>{text}</p> })
                        .collect_view()}
                </div>
            </div>
            <div class="profile-facts">
                <h4>"Contact Information"</h4>
                {content::ABOUT_FACTS
                    .into_iter()
                    .map(|(label, value)| view! { <p><strong>{label}": "</strong>{value}</p> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsPanel(host: PanelHost) -> impl IntoView {
    view! {
        <div class="panel-projects">
            <h3>"My Projects"</h3>
            <p>"Here are some of my recent projects. Click on any project for more details."</p>
            <div class="project-grid">
                {content::PROJECTS
                    .iter()
                    .map(|project| {
                        let title = project.title;
                        view! {
                            <div
                                class="project-card"
                                on:click=move |_| {
                                    host.play_sound(SoundCue::Click);
                                    host.show_dialog("Project Info", format!("Opening project: {title}"));
                                }
                            >
                                <h4>{title}</h4>
                                <p>{project.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let grown = create_rw_signal(false);
    set_timeout(move || grown.set(true), SKILL_BAR_DELAY);

    view! {
        <div class="panel-skills">
            <h3>"Technical Skills"</h3>
            <p>"My proficiency in various technologies and tools:"</p>
            <div class="skill-list">
                {content::SKILLS
                    .iter()
                    .map(|skill| {
                        let percent = skill.percent;
                        view! {
                            <div class="skill-item">
                                <div class="skill-header">
                                    <span class="skill-name">{skill.name}</span>
                                    <span class="skill-percent">{format!("{percent}%")}</span>
                                </div>
                                <div class="skill-bar">
                                    <div
                                        class="skill-progress"
                                        style:width=move || {
                                            if grown.get() { format!("{percent}%") } else { "0%".to_string() }
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ContactPanel(host: PanelHost) -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        host.play_sound(SoundCue::Click);
        let draft = form.get_untracked();
        match draft.validate() {
            Ok(()) => {
                host.show_dialog("Message Sent", draft.success_message());
                form.set(ContactForm::default());
            }
            Err(err) => host.report(&ShellError::from(err)),
        }
    };

    let on_clear = move |_| {
        host.play_sound(SoundCue::Click);
        form.set(ContactForm::default());
    };

    view! {
        <div class="panel-contact">
            <h3>"Contact Me"</h3>
            <p>"Feel free to get in touch with me for collaborations or opportunities."</p>
            <form class="contact-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="contact-name">"Name:"</label>
                    <input
                        type="text"
                        id="contact-name"
                        class="form-control"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="contact-email">"Email:"</label>
                    <input
                        type="email"
                        id="contact-email"
                        class="form-control"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="contact-subject">"Subject:"</label>
                    <input
                        type="text"
                        id="contact-subject"
                        class="form-control"
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="contact-message">"Message:"</label>
                    <textarea
                        id="contact-message"
                        class="form-control"
                        rows="5"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                    <button type="button" class="btn" on:click=on_clear>"Clear"</button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn EducationPanel() -> impl IntoView {
    view! {
        <div class="panel-education">
            <h3>"My Education Journey"</h3>
            <p>"Currently pursuing my academic goals while developing my programming skills:"</p>
            <div class="education-timeline">
                {content::EDUCATION
                    .iter()
                    .map(|item| view! {
                        <div class="timeline-item">
                            <div class="timeline-year">{item.period}</div>
                            <div class="timeline-content">
                                <h4>{item.title}</h4>
                                <p>{item.detail}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="education-note">
                <h4>"Academic & Coding Balance"</h4>
                <p>{content::EDUCATION_NOTE}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SocialPanel(host: PanelHost) -> impl IntoView {
    view! {
        <div class="panel-social">
            <h3>"Connect With Me"</h3>
            <p>"Let's connect on these platforms:"</p>
            <div class="social-links">
                {content::SOCIAL_LINKS
                    .iter()
                    .map(|link| view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link.class_name
                            on:click=move |_| host.play_sound(SoundCue::Click)
                        >
                            <i class=link.icon></i>
                            <div class="social-info">
                                <h4>{link.name}</h4>
                                <p>{link.handle}</p>
                                <p>{link.blurb}</p>
                            </div>
                        </a>
                    })
                    .collect_view()}
                <div class="social-link social-collab">
                    <i class="fas fa-heart"></i>
                    <div class="social-info">
                        <h4>"Let's Collaborate!"</h4>
                        <p>"Open to interesting projects and learning opportunities"</p>
                        <p>"Feel free to reach out for coding discussions or collaborations"</p>
                    </div>
                </div>
            </div>
            <p class="social-note"><strong>"Note:"</strong>" Links will open in a new tab"</p>
        </div>
    }
}

#[component]
pub fn ResumePanel(host: PanelHost) -> impl IntoView {
    view! {
        <div class="resume-content">
            <div class="resume-icon">
                <i class="fas fa-file-alt"></i>
            </div>
            <h3>"My Resume"</h3>
            <p>"Download my complete resume with detailed experience, education, and references."</p>
            <p>"The resume includes:"</p>
            <ul>
                {content::RESUME_SECTIONS
                    .into_iter()
                    .map(|section| view! { <li>{section}</li> })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class="download-btn"
                on:click=move |_| {
                    host.play_sound(SoundCue::Click);
                    host.show_dialog("Download Complete", content::RESUME_DOWNLOADED);
                }
            >
                "Download Resume (PDF)"
            </button>
        </div>
    }
}
