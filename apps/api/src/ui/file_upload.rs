use dioxus::prelude::*;

pub const IDLE_PROMPT: &str = "Drag & drop your resume PDF here, or click to select";
pub const DRAG_PROMPT: &str = "Drop your resume here...";
const IDLE_ICON: &str = "\u{1F4C4}";
const DRAG_ICON: &str = "\u{2B06}";

/// Client-side drag & drop onto the upload area. Dropped files are copied into
/// the file input so the surrounding form posts them unchanged.
pub const DROPZONE_SCRIPT: &str = r#"
(function () {
  var zone = document.getElementById('dropzone');
  if (!zone) return;
  var input = zone.querySelector('input[type=file]');
  var prompt = zone.querySelector('[data-prompt]');
  var icon = zone.querySelector('[data-icon]');
  var idle = prompt.textContent;
  var idleIcon = icon.textContent;
  function setActive(active) {
    zone.classList.toggle('border-blue-500', active);
    zone.classList.toggle('bg-blue-50', active);
    zone.classList.toggle('border-gray-300', !active);
    icon.classList.toggle('text-blue-500', active);
    icon.classList.toggle('text-gray-400', !active);
    icon.textContent = active ? zone.dataset.dragIcon : idleIcon;
    prompt.textContent = active ? zone.dataset.dragPrompt : idle;
  }
  ['dragenter', 'dragover'].forEach(function (ev) {
    zone.addEventListener(ev, function (e) { e.preventDefault(); setActive(true); });
  });
  ['dragleave', 'drop'].forEach(function (ev) {
    zone.addEventListener(ev, function (e) { e.preventDefault(); setActive(false); });
  });
  zone.addEventListener('drop', function (e) {
    if (e.dataTransfer.files.length !== 1) return;
    input.files = e.dataTransfer.files;
    prompt.textContent = e.dataTransfer.files[0].name;
  });
  input.addEventListener('change', function () {
    if (input.files.length === 1) prompt.textContent = input.files[0].name;
  });
})();
"#;

fn zone_class(drag_active: bool) -> &'static str {
    if drag_active {
        "block border-2 border-dashed rounded-lg p-8 text-center cursor-pointer transition-colors border-blue-500 bg-blue-50"
    } else {
        "block border-2 border-dashed rounded-lg p-8 text-center cursor-pointer transition-colors border-gray-300 hover:border-gray-400"
    }
}

/// Single-file PDF picker. Must sit inside a multipart form; posts as `file`.
#[allow(non_snake_case)]
#[component]
pub fn FileUpload(accept: String, max_file_size_mb: usize, drag_active: bool) -> Element {
    let prompt = if drag_active { DRAG_PROMPT } else { IDLE_PROMPT };
    let icon = if drag_active { DRAG_ICON } else { IDLE_ICON };
    let icon_class = if drag_active {
        "h-12 w-12 mb-4 text-4xl text-blue-500"
    } else {
        "h-12 w-12 mb-4 text-4xl text-gray-400"
    };
    rsx! {
        label {
            id: "dropzone",
            class: zone_class(drag_active),
            "data-drag-prompt": DRAG_PROMPT,
            "data-drag-icon": DRAG_ICON,
            input { r#type: "file", name: "file", accept: "{accept}", class: "sr-only" }
            div { class: "flex flex-col items-center",
                div { class: icon_class, "data-icon": "true", "{icon}" }
                p { class: "text-gray-600", "data-prompt": "true", "{prompt}" }
                p { class: "text-sm text-gray-500 mt-2",
                    "Supports PDF files up to {max_file_size_mb}MB"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::render_fragment;

    fn render_file_upload(accept: String, max_file_size_mb: usize, drag_active: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            FileUpload,
            FileUploadProps {
                accept,
                max_file_size_mb,
                drag_active,
            },
        );
        dom.rebuild_in_place();
        render_fragment(&dom)
    }

    #[test]
    fn test_idle_widget() {
        let html = render_file_upload("application/pdf,.pdf".to_string(), 5, false);
        assert!(html.contains("type=\"file\""));
        assert!(html.contains("name=\"file\""));
        assert!(html.contains("accept=\"application/pdf,.pdf\""));
        assert!(!html.contains("multiple"));
        assert!(html.contains("your resume PDF here, or click to select"));
        assert!(html.contains("Supports PDF files up to 5MB"));
        assert!(html.contains("border-gray-300"));
    }

    #[test]
    fn test_drag_active_widget() {
        let html = render_file_upload("application/pdf,.pdf".to_string(), 5, true);
        assert!(html.contains("border-blue-500 bg-blue-50"));
        assert!(html.contains(">Drop your resume here...<"));
        assert!(html.contains("text-blue-500"));
        assert!(html.contains(DRAG_ICON));
    }

    #[test]
    fn test_client_drag_state_matches_drag_variant() {
        let html = render_file_upload("application/pdf,.pdf".to_string(), 5, false);
        assert!(html.contains("data-drag-prompt=\"Drop your resume here...\""));
        assert!(html.contains(&format!("data-drag-icon=\"{DRAG_ICON}\"")));
        assert!(html.contains("data-icon=\"true\""));
        assert!(html.contains(IDLE_ICON));

        for toggle in ["'text-blue-500', active", "'text-gray-400', !active", "dataset.dragIcon"] {
            assert!(DROPZONE_SCRIPT.contains(toggle), "missing {toggle}");
        }
    }

    #[test]
    fn test_size_label_follows_limit() {
        let html = render_file_upload(".pdf".to_string(), 10, false);
        assert!(html.contains("Supports PDF files up to 10MB"));
    }
}
