//! The submission page shell.
//!
//! Assembles the themed stylesheet, the rendered field markup, and the
//! page runtime script into a complete HTML document. The runtime script
//! is one fixed asset shared by every form — it discovers fields through
//! `data-qf-*` attributes, captures values as the visitor interacts, and
//! submits the value map as a single JSON payload.

use quickform_core::QuickformResult;
use quickform_forms::themes::Theme;

use crate::form::SubmissionForm;
use crate::html::escape_html;

/// The terminal thank-you view shown after an accepted submission.
pub fn terminal_body() -> String {
    "<div class=\"qf-terminal\">\
     <h1 class=\"qf-title\">Form submitted Successfully!</h1>\
     <p class=\"qf-paragraph\">Thank you for submitting the form, you can close this page now.</p>\
     </div>"
        .to_string()
}

/// Renders the complete submission page for a session.
pub fn render_page(form: &SubmissionForm, submit_url: &str) -> QuickformResult<String> {
    let body = form.render_body()?;
    let submit_button = if form.is_submitted() {
        String::new()
    } else {
        "<div class=\"qf-error-banner\" style=\"display:none\">Please check the form for errors.</div>\
         <button type=\"button\" class=\"qf-submit\">Submit</button>"
            .to_string()
    };

    Ok(format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>Form</title>\n<style>{stylesheet}</style>\n</head>\n<body>\n\
         <div class=\"qf-page\"><form class=\"qf-form\" data-qf-submit-url=\"{submit_url}\" onsubmit=\"return false\">\
         {body}{submit_button}</form></div>\n\
         <script>{runtime}</script>\n</body>\n</html>\n",
        stylesheet = stylesheet(form.theme()),
        submit_url = escape_html(submit_url),
        runtime = RUNTIME_JS,
    ))
}

/// The page stylesheet, parameterized by the form's theme.
pub fn stylesheet(theme: &Theme) -> String {
    let s = &theme.styles;
    format!(
        "\
.qf-page {{ min-height: 100vh; display: flex; justify-content: center; padding: 2rem 0.5rem; background: {muted}10; }}
.qf-form {{ max-width: 620px; width: 100%; padding: 2rem; display: flex; flex-direction: column; gap: 1rem;
  background: {background}; color: {text}; border: 1px solid {border}; border-radius: 6px;
  box-shadow: 0 1px 3px rgba(0,0,0,0.1); font-family: system-ui, -apple-system, sans-serif; }}
.qf-field {{ display: flex; flex-direction: column; gap: 4px; }}
.qf-title {{ font-size: 24px; font-weight: bold; margin: 0; }}
.qf-subtitle {{ font-size: 18px; color: {muted}; margin: 0; }}
.qf-paragraph {{ margin: 0; }}
.qf-separator {{ border: none; border-top: 1px solid {border}; width: 100%; }}
.qf-label {{ font-weight: 500; }}
.qf-helper {{ font-size: 14px; color: {muted}; }}
.qf-required {{ color: #ef4444; margin-left: 2px; }}
.qf-input {{ width: 100%; padding: 8px 12px; border: 1px solid {input}; border-radius: 6px;
  font-size: 14px; background: {background}; color: {text}; box-sizing: border-box; }}
.qf-input:focus {{ outline: none; border-color: {primary}; }}
.qf-checkbox-row {{ display: flex; align-items: center; gap: 8px; }}
.qf-checkbox {{ width: 16px; height: 16px; accent-color: {primary}; }}
.qf-upload {{ border: 2px dashed {input}; padding: 20px; text-align: center; border-radius: 8px;
  cursor: pointer; color: {muted}; }}
.qf-upload:hover {{ border-color: {primary}; }}
.qf-upload-preview {{ max-width: 100%; border-radius: 8px; }}
.qf-dual {{ display: flex; gap: 16px; }}
.qf-dual-side {{ flex: 1; display: flex; flex-direction: column; gap: 8px; }}
.qf-dual-label {{ font-weight: 500; font-size: 14px; }}
.qf-question {{ font-weight: 500; text-align: center; }}
.qf-rating-buttons {{ display: flex; gap: 8px; justify-content: space-between; margin-top: 8px; }}
.qf-rating-button {{ width: 40px; height: 40px; border: 2px solid {input}; border-radius: 50%;
  background: {background}; color: {text}; cursor: pointer; font-weight: 500; }}
.qf-rating-button:hover {{ border-color: var(--qf-hover-border); }}
.qf-rating-button.selected {{ background: var(--qf-selected-bg); border-color: var(--qf-selected-border); color: #fff; }}
.qf-rating-labels {{ display: flex; justify-content: space-between; font-size: 14px; margin-top: 4px; }}
.qf-pictures {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 12px; }}
.qf-picture-option {{ cursor: pointer; border: 2px solid transparent; padding: 4px; border-radius: 8px; }}
.qf-picture-option:hover {{ border-color: {border}; }}
.qf-picture-option.selected {{ border-color: {primary}; }}
.qf-picture-option img {{ width: 100%; height: 150px; object-fit: cover; border-radius: 6px; }}
.qf-picture-label {{ text-align: center; font-size: 14px; margin-top: 4px; }}
.qf-field-invalid .qf-label, .qf-field-invalid .qf-checkbox-label {{ color: #ef4444; }}
.qf-field-invalid .qf-input, .qf-field-invalid .qf-upload {{ border-color: #ef4444; }}
.qf-error-banner {{ color: #ef4444; font-size: 14px; }}
.qf-submit {{ margin-top: 1rem; background: {primary}; color: {primary_text}; padding: 8px 16px;
  border: none; border-radius: 6px; font-weight: 500; cursor: pointer; }}
.qf-submit:disabled {{ opacity: 0.6; cursor: default; }}
.qf-terminal {{ display: flex; flex-direction: column; gap: 1rem; }}
",
        background = s.background,
        text = s.text,
        border = s.border,
        input = s.input,
        primary = s.primary,
        primary_text = s.primary_text,
        muted = s.muted,
    )
}

/// The fixed page runtime. Discovers fields via `data-qf-*` attributes,
/// captures values on interaction (file uploads are encoded to data URLs
/// as they are chosen), validates required fields, and submits one JSON
/// payload. Shared by every form; only the submit URL differs per page.
pub const RUNTIME_JS: &str = r#"(function () {
  var form = document.querySelector('.qf-form');
  if (!form) { return; }
  var submitUrl = form.getAttribute('data-qf-submit-url');
  var submitBtn = form.querySelector('.qf-submit');
  var banner = form.querySelector('.qf-error-banner');

  function wireUpload(area, input, preview) {
    area.addEventListener('click', function () { input.click(); });
    input.addEventListener('change', function () {
      var file = input.files && input.files[0];
      if (!file) { return; }
      var reader = new FileReader();
      reader.onload = function (e) {
        preview.src = e.target.result.toString();
        preview.style.display = 'block';
        area.style.display = 'none';
      };
      reader.readAsDataURL(file);
    });
  }

  form.querySelectorAll('.qf-field').forEach(function (field) {
    var type = field.getAttribute('data-qf-type');

    if (type === 'ImageUploadField' || type === 'DualImageUpload') {
      var inputs = field.querySelectorAll('input[type=file]');
      var areas = field.querySelectorAll('.qf-upload');
      var previews = field.querySelectorAll('.qf-upload-preview');
      inputs.forEach(function (input, i) { wireUpload(areas[i], input, previews[i]); });
    }

    if (type === 'RatingScaleField') {
      var hidden = field.querySelector('input[type=hidden]');
      field.querySelectorAll('.qf-rating-button').forEach(function (btn) {
        btn.addEventListener('click', function () {
          field.querySelectorAll('.qf-rating-button').forEach(function (other) {
            other.classList.remove('selected');
          });
          btn.classList.add('selected');
          hidden.value = btn.getAttribute('data-qf-value');
        });
      });
    }

    if (type === 'PictureSelectField') {
      var pictureHidden = field.querySelector('input[type=hidden]');
      field.querySelectorAll('.qf-picture-option').forEach(function (option) {
        option.addEventListener('click', function () {
          field.querySelectorAll('.qf-picture-option').forEach(function (other) {
            other.classList.remove('selected');
          });
          option.classList.add('selected');
          pictureHidden.value = option.getAttribute('data-qf-url');
        });
      });
    }
  });

  function capture(field, type) {
    if (type === 'TextField' || type === 'NumberField' || type === 'DateField') {
      return field.querySelector('.qf-input').value;
    }
    if (type === 'TextAreaField' || type === 'SelectField') {
      return field.querySelector('.qf-input').value;
    }
    if (type === 'CheckboxField') {
      return field.querySelector('.qf-checkbox').checked;
    }
    if (type === 'ImageUploadField') {
      var preview = field.querySelector('.qf-upload-preview');
      return preview.getAttribute('src') || '';
    }
    if (type === 'RatingScaleField') {
      var raw = field.querySelector('input[type=hidden]').value;
      if (!raw) { return null; }
      var scale = field.querySelector('.qf-rating');
      return {
        value: parseInt(raw, 10),
        minValue: parseInt(scale.getAttribute('data-qf-min'), 10),
        maxValue: parseInt(scale.getAttribute('data-qf-max'), 10)
      };
    }
    if (type === 'PictureSelectField') {
      var selected = field.querySelector('.qf-picture-option.selected');
      if (!selected) { return null; }
      return {
        url: selected.getAttribute('data-qf-url'),
        label: selected.getAttribute('data-qf-label')
      };
    }
    if (type === 'DualImageUpload') {
      var previews = field.querySelectorAll('.qf-upload-preview');
      var left = previews[0].getAttribute('src');
      var right = previews[1].getAttribute('src');
      if (!left && !right) { return null; }
      return { left: left || null, right: right || null };
    }
    return null;
  }

  function isEmpty(type, value) {
    if (value === null || value === undefined) { return true; }
    if (type === 'CheckboxField') { return value !== true; }
    if (type === 'DualImageUpload') { return !value.left || !value.right; }
    if (typeof value === 'string') { return value.length === 0; }
    return false;
  }

  if (!submitBtn) { return; }
  submitBtn.addEventListener('click', function () {
    var data = {};
    var anyInvalid = false;

    form.querySelectorAll('.qf-field').forEach(function (field) {
      var type = field.getAttribute('data-qf-type');
      var id = field.getAttribute('data-qf-field');
      var required = field.getAttribute('data-qf-required') === 'true';
      field.classList.remove('qf-field-invalid');

      var value = capture(field, type);
      if (value === null) { return; }
      if (isEmpty(type, value)) {
        if (required) {
          field.classList.add('qf-field-invalid');
          anyInvalid = true;
        }
        return;
      }
      data[id] = value;
    });

    // Surface every failure at once and keep the entered values.
    if (anyInvalid) {
      banner.style.display = 'block';
      return;
    }
    banner.style.display = 'none';

    submitBtn.disabled = true;
    submitBtn.textContent = 'Submitting...';
    fetch(submitUrl, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(data)
    }).then(function (response) {
      if (!response.ok) { throw new Error('submit failed: ' + response.status); }
      form.innerHTML = '<div class="qf-terminal">' +
        '<h1 class="qf-title">Form submitted Successfully!</h1>' +
        '<p class="qf-paragraph">Thank you for submitting the form, you can close this page now.</p>' +
        '</div>';
    }).catch(function () {
      submitBtn.disabled = false;
      submitBtn.textContent = 'Submit';
      banner.textContent = 'Something went wrong. Please try again.';
      banner.style.display = 'block';
    });
  });
})();
"#;
