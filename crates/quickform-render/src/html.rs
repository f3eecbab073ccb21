//! Per-kind field markup for the submission page.
//!
//! One rendering function per field kind, dispatched through a single
//! exhaustive `match` in [`render_field`]. Every element carries
//! `data-qf-*` attributes so the page runtime script can wire value
//! capture without per-form generated code.

use std::fmt::Write as _;

use quickform_core::QuickformResult;
use quickform_forms::attributes::{
    CheckboxAttributes, DateAttributes, DualImageUploadAttributes, ImageUploadAttributes,
    ParagraphAttributes, PictureSelectAttributes, RatingScaleAttributes, SelectAttributes,
    SpacerAttributes, TextAreaAttributes, TextAttributes, TitleAttributes,
};
use quickform_forms::rating::{LabelPosition, RatingColorPolicy};
use quickform_forms::{FieldInstance, FieldType, SubmissionValue};

/// Escapes text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn text_value(value: Option<&SubmissionValue>) -> &str {
    match value {
        Some(SubmissionValue::Text(s)) => s,
        _ => "",
    }
}

fn label_tag(label: &str, required: bool) -> String {
    let star = if required { "<span class=\"qf-required\">*</span>" } else { "" };
    format!("<label class=\"qf-label\">{}{star}</label>", escape_html(label))
}

fn helper_tag(helper: &str) -> String {
    if helper.is_empty() {
        String::new()
    } else {
        format!("<div class=\"qf-helper\">{}</div>", escape_html(helper))
    }
}

/// Renders one field, with its current value and error state, as the
/// submission page shows it.
pub fn render_field(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
    invalid: bool,
) -> QuickformResult<String> {
    let inner = match instance.kind {
        FieldType::TextField => render_text(instance, value, "text")?,
        FieldType::TitleField => render_title(instance)?,
        FieldType::SubTitleField => render_subtitle(instance)?,
        FieldType::ParagraphField => render_paragraph(instance)?,
        FieldType::SeparatorField => "<hr class=\"qf-separator\" />".to_string(),
        FieldType::SpacerField => render_spacer(instance)?,
        FieldType::NumberField => render_text(instance, value, "number")?,
        FieldType::TextAreaField => render_textarea(instance, value)?,
        FieldType::DateField => render_date(instance, value)?,
        FieldType::SelectField => render_select(instance, value)?,
        FieldType::CheckboxField => render_checkbox(instance, value)?,
        FieldType::ImageUploadField => render_image_upload(instance, value)?,
        FieldType::RatingScaleField => render_rating_scale(instance, value)?,
        FieldType::DualImageUpload => render_dual_image(instance, value)?,
        FieldType::PictureSelectField => render_picture_select(instance, value)?,
    };

    let invalid_class = if invalid { " qf-field-invalid" } else { "" };
    Ok(format!(
        "<div class=\"qf-field{invalid_class}\" data-qf-field=\"{id}\" data-qf-type=\"{tag}\" data-qf-required=\"{required}\">{inner}</div>",
        id = escape_html(&instance.id),
        tag = instance.kind.tag(),
        required = instance.required(),
    ))
}

fn render_title(instance: &FieldInstance) -> QuickformResult<String> {
    let attrs = TitleAttributes::of(instance)?;
    Ok(format!(
        "<h1 class=\"qf-title\">{}</h1>",
        escape_html(&attrs.title)
    ))
}

fn render_subtitle(instance: &FieldInstance) -> QuickformResult<String> {
    let attrs = TitleAttributes::of(instance)?;
    Ok(format!(
        "<h2 class=\"qf-subtitle\">{}</h2>",
        escape_html(&attrs.title)
    ))
}

fn render_paragraph(instance: &FieldInstance) -> QuickformResult<String> {
    let attrs = ParagraphAttributes::of(instance)?;
    Ok(format!(
        "<p class=\"qf-paragraph\">{}</p>",
        escape_html(&attrs.text)
    ))
}

fn render_spacer(instance: &FieldInstance) -> QuickformResult<String> {
    let attrs = SpacerAttributes::of(instance)?;
    Ok(format!(
        "<div class=\"qf-spacer\" style=\"height:{}px\"></div>",
        attrs.height
    ))
}

fn render_text(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
    input_type: &str,
) -> QuickformResult<String> {
    let attrs = TextAttributes::of(instance)?;
    Ok(format!(
        "{label}<input type=\"{input_type}\" class=\"qf-input\" name=\"{id}\" placeholder=\"{placeholder}\" value=\"{value}\" />{helper}",
        label = label_tag(&attrs.label, attrs.required),
        id = escape_html(&instance.id),
        placeholder = escape_html(&attrs.place_holder),
        value = escape_html(text_value(value)),
        helper = helper_tag(&attrs.helper_text),
    ))
}

fn render_textarea(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = TextAreaAttributes::of(instance)?;
    Ok(format!(
        "{label}<textarea class=\"qf-input\" name=\"{id}\" rows=\"{rows}\" placeholder=\"{placeholder}\">{value}</textarea>{helper}",
        label = label_tag(&attrs.label, attrs.required),
        id = escape_html(&instance.id),
        rows = attrs.rows,
        placeholder = escape_html(&attrs.place_holder),
        value = escape_html(text_value(value)),
        helper = helper_tag(&attrs.helper_text),
    ))
}

fn render_date(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = DateAttributes::of(instance)?;
    Ok(format!(
        "{label}<input type=\"date\" class=\"qf-input\" name=\"{id}\" value=\"{value}\" />{helper}",
        label = label_tag(&attrs.label, attrs.required),
        id = escape_html(&instance.id),
        value = escape_html(text_value(value)),
        helper = helper_tag(&attrs.helper_text),
    ))
}

fn render_select(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = SelectAttributes::of(instance)?;
    let current = text_value(value);
    let mut options = format!(
        "<option value=\"\" disabled{}>{}</option>",
        if current.is_empty() { " selected" } else { "" },
        escape_html(&attrs.place_holder)
    );
    for option in &attrs.options {
        let selected = if option == current { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape_html(option)
        );
    }
    Ok(format!(
        "{label}<select class=\"qf-input\" name=\"{id}\">{options}</select>{helper}",
        label = label_tag(&attrs.label, attrs.required),
        id = escape_html(&instance.id),
        helper = helper_tag(&attrs.helper_text),
    ))
}

fn render_checkbox(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = CheckboxAttributes::of(instance)?;
    let checked = matches!(value, Some(SubmissionValue::Bool(true)))
        || matches!(value, Some(SubmissionValue::Text(s)) if s == "true");
    Ok(format!(
        "<div class=\"qf-checkbox-row\"><input type=\"checkbox\" class=\"qf-checkbox\" name=\"{id}\"{checked} /><span class=\"qf-checkbox-label\">{label}{star}</span></div>{helper}",
        id = escape_html(&instance.id),
        checked = if checked { " checked" } else { "" },
        label = escape_html(&attrs.label),
        star = if attrs.required { "<span class=\"qf-required\">*</span>" } else { "" },
        helper = helper_tag(&attrs.helper_text),
    ))
}

fn render_image_upload(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = ImageUploadAttributes::of(instance)?;
    let preview = text_value(value);
    let has_preview = !preview.is_empty();
    Ok(format!(
        "{label}{helper}\
         <div class=\"qf-upload\" data-qf-role=\"upload\"{hidden}>{prompt}</div>\
         <input type=\"file\" accept=\"image/*\" name=\"{id}\" data-qf-max-dimension=\"{max}\" style=\"display:none\" />\
         <img class=\"qf-upload-preview\" alt=\"\"{src}{shown} />",
        label = label_tag(&attrs.label, attrs.required),
        helper = helper_tag(&attrs.helper_text),
        hidden = if has_preview { " style=\"display:none\"" } else { "" },
        prompt = escape_html(&attrs.prompt),
        id = escape_html(&instance.id),
        max = attrs.max_dimension,
        src = if has_preview {
            format!(" src=\"{}\"", escape_html(preview))
        } else {
            String::new()
        },
        shown = if has_preview { "" } else { " style=\"display:none\"" },
    ))
}

fn render_rating_scale(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = RatingScaleAttributes::of(instance)?;
    let policy = RatingColorPolicy::from_attributes(attrs.color_scheme, attrs.gradient_scheme);

    let selected: Option<i64> = match value {
        Some(SubmissionValue::Rating { value, .. }) => Some(*value),
        Some(SubmissionValue::Text(s)) => s.parse().ok(),
        _ => None,
    };

    let mut buttons = String::new();
    for v in attrs.min_value..=attrs.max_value {
        let colors = policy.color_for(v, attrs.min_value, attrs.max_value);
        let selected_class = if selected == Some(v) { " selected" } else { "" };
        let _ = write!(
            buttons,
            "<button type=\"button\" class=\"qf-rating-button{selected_class}\" data-qf-value=\"{v}\" \
             style=\"--qf-selected-bg:{bg};--qf-selected-border:{border};--qf-hover-border:{hover}\">{v}</button>",
            bg = colors.selected_bg,
            border = colors.selected_border,
            hover = colors.hover_border,
        );
    }

    let hidden_value = selected.map(|v| v.to_string()).unwrap_or_default();
    Ok(format!(
        "{label}{helper}\
         <div class=\"qf-question\">{question}</div>\
         <div class=\"qf-rating\" data-qf-min=\"{min}\" data-qf-max=\"{max}\">\
         <div class=\"qf-rating-buttons\">{buttons}</div>\
         <div class=\"qf-rating-labels\">\
         <span style=\"color:{start}\">{min_label}</span>\
         <span style=\"color:{middle}\">{mid_label}</span>\
         <span style=\"color:{end}\">{max_label}</span>\
         </div></div>\
         <input type=\"hidden\" name=\"{id}\" value=\"{hidden_value}\" />",
        label = label_tag(&attrs.label, attrs.required),
        helper = helper_tag(&attrs.helper_text),
        question = escape_html(&attrs.question),
        min = attrs.min_value,
        max = attrs.max_value,
        start = policy.label_color(LabelPosition::Start),
        middle = policy.label_color(LabelPosition::Middle),
        end = policy.label_color(LabelPosition::End),
        min_label = escape_html(&attrs.min_label),
        mid_label = escape_html(&attrs.mid_label),
        max_label = escape_html(&attrs.max_label),
        id = escape_html(&instance.id),
    ))
}

fn render_dual_image(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = DualImageUploadAttributes::of(instance)?;
    let (left, right) = match value {
        Some(SubmissionValue::ImagePair { left, right }) => {
            (left.as_deref().unwrap_or(""), right.as_deref().unwrap_or(""))
        }
        _ => ("", ""),
    };

    let side = |side: &str, label: &str, prompt: &str, preview: &str| {
        let has_preview = !preview.is_empty();
        format!(
            "<div class=\"qf-dual-side\">\
             <div class=\"qf-dual-label\">{label}</div>\
             <div class=\"qf-upload qf-dual-upload\" data-qf-role=\"upload\"{hidden}>{prompt}</div>\
             <input type=\"file\" accept=\"image/*\" name=\"{id}_{side}\" data-qf-side=\"{side}\" style=\"display:none\" />\
             <img class=\"qf-upload-preview\" alt=\"\"{src}{shown} />\
             </div>",
            label = escape_html(label),
            prompt = escape_html(prompt),
            id = escape_html(&instance.id),
            hidden = if has_preview { " style=\"display:none\"" } else { "" },
            src = if has_preview {
                format!(" src=\"{}\"", escape_html(preview))
            } else {
                String::new()
            },
            shown = if has_preview { "" } else { " style=\"display:none\"" },
        )
    };

    Ok(format!(
        "{label}{helper}<div class=\"qf-dual\">{left_side}{right_side}</div>",
        label = label_tag(&attrs.label, attrs.required),
        helper = helper_tag(&attrs.helper_text),
        left_side = side("left", &attrs.left_label, &attrs.left_prompt, left),
        right_side = side("right", &attrs.right_label, &attrs.right_prompt, right),
    ))
}

fn render_picture_select(
    instance: &FieldInstance,
    value: Option<&SubmissionValue>,
) -> QuickformResult<String> {
    let attrs = PictureSelectAttributes::of(instance)?;
    let selected_url = match value {
        Some(SubmissionValue::PictureChoice { url, .. }) => url.as_str(),
        Some(SubmissionValue::Text(s)) => s.as_str(),
        _ => "",
    };

    let mut options = String::new();
    for image in &attrs.images {
        let selected = if !selected_url.is_empty() && image.url == selected_url {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<div class=\"qf-picture-option{selected}\" data-qf-url=\"{url}\" data-qf-label=\"{label}\">\
             <img src=\"{url}\" alt=\"{label}\" />\
             <div class=\"qf-picture-label\">{label}</div>\
             </div>",
            url = escape_html(&image.url),
            label = escape_html(&image.label),
        );
    }

    Ok(format!(
        "{label}{helper}<div class=\"qf-pictures\">{options}</div>\
         <input type=\"hidden\" name=\"{id}\" value=\"{value}\" />",
        label = label_tag(&attrs.label, attrs.required),
        helper = helper_tag(&attrs.helper_text),
        id = escape_html(&instance.id),
        value = escape_html(selected_url),
    ))
}
