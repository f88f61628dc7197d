use dioxus::prelude::*;

use crate::models::analysis::AnalysisResults;
use crate::models::job::JobConfigs;
use crate::ui::document::render_to_html;
use crate::ui::file_upload::DROPZONE_SCRIPT;
use crate::ui::navbar::BRAND;
use crate::ui::{FileUpload, Navbar, ResultsDisplay};

#[derive(Clone, PartialEq)]
pub struct JobOption {
    pub id: String,
    pub title: String,
}

impl JobOption {
    pub fn from_configs(jobs: &JobConfigs) -> Vec<JobOption> {
        jobs.iter()
            .map(|(id, job)| JobOption {
                id: id.clone(),
                title: if job.title.trim().is_empty() {
                    id.clone()
                } else {
                    job.title.clone()
                },
            })
            .collect()
    }
}

/// Everything the analyzer page needs for one render.
#[derive(Clone, PartialEq)]
pub struct AnalyzerView {
    pub jobs: Vec<JobOption>,
    pub selected_job: Option<String>,
    pub accept: String,
    pub max_file_size_mb: usize,
    pub results: Option<AnalysisResults>,
    pub error: Option<String>,
}

#[allow(non_snake_case)]
#[component]
fn Layout(title: String, children: Element) -> Element {
    let full_title = format!("{title} | {BRAND}");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50",
            Navbar {}
            main { class: "container mx-auto py-8", {children} }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ResumeAnalyzer(view: AnalyzerView) -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto space-y-6",
            div { class: "bg-white rounded-lg shadow p-6",
                h2 { class: "text-2xl font-semibold text-gray-800 mb-4", "Analyze your resume" }
                if let Some(error) = &view.error {
                    div { class: "mb-4 rounded border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
                        role: "alert",
                        "{error}"
                    }
                }
                form {
                    method: "post",
                    action: "/analyze",
                    "enctype": "multipart/form-data",
                    class: "space-y-4",
                    div {
                        label { r#for: "job_id", class: "block text-sm text-gray-500 mb-1", "Target role" }
                        if view.jobs.is_empty() {
                            p { class: "text-sm text-gray-400", "No job profiles available." }
                        } else {
                            select {
                                id: "job_id",
                                name: "job_id",
                                class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                for job in view.jobs.iter() {
                                    option {
                                        value: "{job.id}",
                                        selected: view.selected_job.as_deref() == Some(job.id.as_str()),
                                        "{job.title}"
                                    }
                                }
                            }
                        }
                    }
                    FileUpload {
                        accept: view.accept.clone(),
                        max_file_size_mb: view.max_file_size_mb,
                        drag_active: false,
                    }
                    button {
                        r#type: "submit",
                        class: "w-full px-6 py-2 bg-blue-600 text-white rounded text-sm cursor-pointer hover:bg-blue-800",
                        "Analyze Resume"
                    }
                }
            }
            ResultsDisplay { results: view.results.clone() }
        }
        script { dangerous_inner_html: DROPZONE_SCRIPT }
    }
}

#[allow(non_snake_case)]
#[component]
fn HomePage(view: AnalyzerView) -> Element {
    rsx! {
        Layout { title: "Analyze".to_string(),
            ResumeAnalyzer { view: view.clone() }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn AboutPage(max_file_size_mb: usize) -> Element {
    rsx! {
        Layout { title: "About".to_string(),
            div { class: "max-w-3xl mx-auto bg-white rounded-lg shadow p-6 space-y-4",
                h2 { class: "text-2xl font-semibold text-gray-800", "About {BRAND}" }
                p { class: "text-gray-700",
                    "Upload a PDF resume and pick a target role. The analyzer extracts the text, "
                    "scores each required skill, compares your stated years of experience with the "
                    "role, and suggests what to strengthen."
                }
                p { class: "text-sm text-gray-500",
                    "Uploads are limited to a single PDF of up to {max_file_size_mb}MB."
                }
            }
        }
    }
}

pub fn render_home(view: AnalyzerView) -> String {
    let mut dom = VirtualDom::new_with_props(HomePage, HomePageProps { view });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

pub fn render_about(max_file_size_mb: usize) -> String {
    let mut dom = VirtualDom::new_with_props(AboutPage, AboutPageProps { max_file_size_mb });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
