//! Per-kind markup and wiring emitters for the embed bundle.
//!
//! One emit function per field kind, dispatched through the single
//! exhaustive `match` in [`emit_field`]. Each emitter synthesizes a
//! self-contained JavaScript block that builds the field's DOM from its
//! attribute values (interpolated server-side as JS literals), wires its
//! events, and registers two closures with the bundle scaffolding:
//!
//! - a *collector* returning a promise for the field's `[id, value]` pair
//!   (or `null` when the field has nothing to contribute) — file-backed
//!   fields resolve only once their data-URL encoding finishes, which is
//!   what lets the scaffolding join every encoding before submitting;
//! - a *required check* (only when the field is marked required) that
//!   toggles the field's error styling and reports whether it passes.
//!
//! The emitted blocks reference `el`, `readFile`, `form`, `collectors`,
//! and `checks` from the scaffolding in
//! [`bundle`](crate::bundle::generate_bundle).

use quickform_core::QuickformResult;
use quickform_forms::attributes::{
    CheckboxAttributes, DateAttributes, DualImageUploadAttributes, ImageUploadAttributes,
    ParagraphAttributes, PictureSelectAttributes, RatingScaleAttributes, SelectAttributes,
    SpacerAttributes, TextAreaAttributes, TextAttributes, TitleAttributes,
};
use quickform_forms::rating::{LabelPosition, RatingColorPolicy};
use quickform_forms::{FieldInstance, FieldType};

/// Encodes text as a JS string literal (quotes, escapes, the lot).
pub(crate) fn js_str(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Emits the JavaScript block for one field instance.
pub fn emit_field(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    match instance.kind {
        FieldType::TextField => emit_text(out, instance, "text"),
        FieldType::TitleField => emit_title(out, instance),
        FieldType::SubTitleField => emit_subtitle(out, instance),
        FieldType::ParagraphField => emit_paragraph(out, instance),
        FieldType::SeparatorField => {
            emit_separator(out);
            Ok(())
        }
        FieldType::SpacerField => emit_spacer(out, instance),
        FieldType::NumberField => emit_text(out, instance, "number"),
        FieldType::TextAreaField => emit_textarea(out, instance),
        FieldType::DateField => emit_date(out, instance),
        FieldType::SelectField => emit_select(out, instance),
        FieldType::CheckboxField => emit_checkbox(out, instance),
        FieldType::ImageUploadField => emit_image_upload(out, instance),
        FieldType::RatingScaleField => emit_rating_scale(out, instance),
        FieldType::DualImageUpload => emit_dual_image(out, instance),
        FieldType::PictureSelectField => emit_picture_select(out, instance),
    }
}

fn push_block(out: &mut String, body: &str) {
    out.push_str("  (function () {\n");
    out.push_str(body);
    out.push_str("  })();\n");
}

/// `label` + `helper` element statements shared by the input emitters.
fn label_and_helper(label: &str, helper: &str) -> String {
    format!(
        "    var wrapper = el('div', 'quick-form-field');\n\
         \x20   var label = el('label', 'quick-form-label');\n\
         \x20   label.textContent = {label};\n\
         \x20   var helper = el('div', 'quick-form-helper-text');\n\
         \x20   helper.textContent = {helper};\n",
        label = js_str(label),
        helper = js_str(helper),
    )
}

fn required_check(required: bool, ok_expr: &str) -> String {
    if !required {
        return String::new();
    }
    format!(
        "    checks.push(function () {{\n\
         \x20     var ok = {ok_expr};\n\
         \x20     wrapper.classList.toggle('quick-form-field-invalid', !ok);\n\
         \x20     return ok;\n\
         \x20   }});\n"
    )
}

fn emit_title(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = TitleAttributes::of(instance)?;
    push_block(
        out,
        &format!(
            "    var wrapper = el('div', 'quick-form-field');\n\
             \x20   var title = el('h1', 'quick-form-title');\n\
             \x20   title.textContent = {title};\n\
             \x20   wrapper.appendChild(title);\n\
             \x20   form.appendChild(wrapper);\n",
            title = js_str(&attrs.title),
        ),
    );
    Ok(())
}

fn emit_subtitle(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = TitleAttributes::of(instance)?;
    push_block(
        out,
        &format!(
            "    var wrapper = el('div', 'quick-form-field');\n\
             \x20   var subtitle = el('h2', 'quick-form-subtitle');\n\
             \x20   subtitle.textContent = {title};\n\
             \x20   wrapper.appendChild(subtitle);\n\
             \x20   form.appendChild(wrapper);\n",
            title = js_str(&attrs.title),
        ),
    );
    Ok(())
}

fn emit_paragraph(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = ParagraphAttributes::of(instance)?;
    push_block(
        out,
        &format!(
            "    var wrapper = el('div', 'quick-form-field');\n\
             \x20   var paragraph = el('p', 'quick-form-paragraph');\n\
             \x20   paragraph.textContent = {text};\n\
             \x20   wrapper.appendChild(paragraph);\n\
             \x20   form.appendChild(wrapper);\n",
            text = js_str(&attrs.text),
        ),
    );
    Ok(())
}

fn emit_separator(out: &mut String) {
    push_block(
        out,
        "    var wrapper = el('div', 'quick-form-field');\n\
         \x20   wrapper.appendChild(el('hr', 'quick-form-separator'));\n\
         \x20   form.appendChild(wrapper);\n",
    );
}

fn emit_spacer(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = SpacerAttributes::of(instance)?;
    push_block(
        out,
        &format!(
            "    var wrapper = el('div', 'quick-form-field');\n\
             \x20   var spacer = el('div');\n\
             \x20   spacer.style.height = '{height}px';\n\
             \x20   wrapper.appendChild(spacer);\n\
             \x20   form.appendChild(wrapper);\n",
            height = attrs.height,
        ),
    );
    Ok(())
}

fn emit_text(out: &mut String, instance: &FieldInstance, input_type: &str) -> QuickformResult<()> {
    let attrs = TextAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var input = el('input', 'quick-form-input');\n\
             \x20   input.type = '{input_type}';\n\
             \x20   input.name = {id};\n\
             \x20   input.placeholder = {placeholder};\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(input);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(input.value ? [{id}, input.value] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            placeholder = js_str(&attrs.place_holder),
            check = required_check(attrs.required, "input.value.length > 0"),
        ),
    );
    Ok(())
}

fn emit_textarea(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = TextAreaAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var input = el('textarea', 'quick-form-input');\n\
             \x20   input.name = {id};\n\
             \x20   input.rows = {rows};\n\
             \x20   input.placeholder = {placeholder};\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(input);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(input.value ? [{id}, input.value] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            rows = attrs.rows,
            placeholder = js_str(&attrs.place_holder),
            check = required_check(attrs.required, "input.value.length > 0"),
        ),
    );
    Ok(())
}

fn emit_date(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = DateAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var input = el('input', 'quick-form-input');\n\
             \x20   input.type = 'date';\n\
             \x20   input.name = {id};\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(input);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(input.value ? [{id}, input.value] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            check = required_check(attrs.required, "input.value.length > 0"),
        ),
    );
    Ok(())
}

fn emit_select(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = SelectAttributes::of(instance)?;
    let id = js_str(&instance.id);
    let options = serde_json::to_string(&attrs.options)?;
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var select = el('select', 'quick-form-input');\n\
             \x20   select.name = {id};\n\
             \x20   var placeholder = el('option');\n\
             \x20   placeholder.value = '';\n\
             \x20   placeholder.disabled = true;\n\
             \x20   placeholder.selected = true;\n\
             \x20   placeholder.textContent = {placeholder_text};\n\
             \x20   select.appendChild(placeholder);\n\
             \x20   {options}.forEach(function (choice) {{\n\
             \x20     var option = el('option');\n\
             \x20     option.value = choice;\n\
             \x20     option.textContent = choice;\n\
             \x20     select.appendChild(option);\n\
             \x20   }});\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(select);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(select.value ? [{id}, select.value] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            placeholder_text = js_str(&attrs.place_holder),
            check = required_check(attrs.required, "select.value.length > 0"),
        ),
    );
    Ok(())
}

fn emit_checkbox(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = CheckboxAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var row = el('div', 'quick-form-checkbox-wrapper');\n\
             \x20   var checkbox = el('input', 'quick-form-checkbox');\n\
             \x20   checkbox.type = 'checkbox';\n\
             \x20   checkbox.name = {id};\n\
             \x20   var caption = el('span');\n\
             \x20   caption.textContent = {caption};\n\
             \x20   row.appendChild(checkbox);\n\
             \x20   row.appendChild(caption);\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   wrapper.appendChild(row);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve([{id}, checkbox.checked]);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            caption = js_str(&attrs.label),
            check = required_check(attrs.required, "checkbox.checked"),
        ),
    );
    Ok(())
}

fn emit_image_upload(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = ImageUploadAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var area = el('div', 'quick-form-image-upload');\n\
             \x20   area.textContent = {prompt};\n\
             \x20   var input = el('input');\n\
             \x20   input.type = 'file';\n\
             \x20   input.accept = 'image/*';\n\
             \x20   input.name = {id};\n\
             \x20   input.style.display = 'none';\n\
             \x20   var preview = el('img', 'quick-form-image-preview');\n\
             \x20   preview.style.display = 'none';\n\
             \x20   area.addEventListener('click', function () {{ input.click(); }});\n\
             \x20   input.addEventListener('change', function () {{\n\
             \x20     readFile(input.files && input.files[0]).then(function (url) {{\n\
             \x20       if (url) {{\n\
             \x20         preview.src = url;\n\
             \x20         preview.style.display = 'block';\n\
             \x20         area.style.display = 'none';\n\
             \x20       }}\n\
             \x20     }});\n\
             \x20   }});\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   wrapper.appendChild(area);\n\
             \x20   wrapper.appendChild(input);\n\
             \x20   wrapper.appendChild(preview);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return readFile(input.files && input.files[0]).then(function (url) {{\n\
             \x20       return url ? [{id}, url] : null;\n\
             \x20     }});\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            prompt = js_str(&attrs.prompt),
            check = required_check(attrs.required, "!!(input.files && input.files.length)"),
        ),
    );
    Ok(())
}

fn family_literal(family: &quickform_forms::rating::ColorFamily) -> String {
    format!(
        "{{ bg: '{}', border: '{}', hover: '{}' }}",
        family.selected_bg, family.selected_border, family.hover_border
    )
}

fn emit_rating_scale(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = RatingScaleAttributes::of(instance)?;
    let id = js_str(&instance.id);
    let policy = RatingColorPolicy::from_attributes(attrs.color_scheme, attrs.gradient_scheme);
    let (min, max) = (attrs.min_value, attrs.max_value);

    // The bucket thresholds are fixed server-side; the generated picker
    // only needs the three resolved color triples.
    let pick = match policy {
        RatingColorPolicy::Solid(_) => format!(
            "    var pick = function () {{ return {colors}; }};\n",
            colors = family_literal(policy.color_for(min, min, max)),
        ),
        RatingColorPolicy::Gradient(scheme) => {
            let [first, second, third] = scheme.families();
            format!(
                "    var pick = function (v) {{\n\
                 \x20     var p = {max} === {min} ? 0 : (v - {min}) / ({max} - {min});\n\
                 \x20     if (p <= 0.33) {{ return {first}; }}\n\
                 \x20     if (p <= 0.66) {{ return {second}; }}\n\
                 \x20     return {third};\n\
                 \x20   }};\n",
                first = family_literal(first),
                second = family_literal(second),
                third = family_literal(third),
            )
        }
    };

    push_block(
        out,
        &format!(
            "{head}\
             \x20   var question = el('div', 'quick-form-rating-question');\n\
             \x20   question.textContent = {question};\n\
             \x20   var scale = el('div', 'quick-form-rating-scale');\n\
             \x20   var buttons = el('div', 'quick-form-rating-buttons');\n\
             \x20   var hidden = el('input');\n\
             \x20   hidden.type = 'hidden';\n\
             \x20   hidden.name = {id};\n\
             {pick}\
             \x20   for (var v = {min}; v <= {max}; v++) {{\n\
             \x20     (function (v) {{\n\
             \x20       var colors = pick(v);\n\
             \x20       var button = el('button', 'quick-form-rating-button');\n\
             \x20       button.type = 'button';\n\
             \x20       button.textContent = String(v);\n\
             \x20       button.style.setProperty('--quick-form-selected-bg', colors.bg);\n\
             \x20       button.style.setProperty('--quick-form-selected-border', colors.border);\n\
             \x20       button.style.setProperty('--quick-form-hover-border', colors.hover);\n\
             \x20       button.addEventListener('click', function () {{\n\
             \x20         buttons.querySelectorAll('button').forEach(function (other) {{\n\
             \x20           other.classList.remove('selected');\n\
             \x20         }});\n\
             \x20         button.classList.add('selected');\n\
             \x20         hidden.value = String(v);\n\
             \x20       }});\n\
             \x20       buttons.appendChild(button);\n\
             \x20     }})(v);\n\
             \x20   }}\n\
             \x20   var labels = el('div', 'quick-form-rating-labels');\n\
             \x20   var minLabel = el('span');\n\
             \x20   minLabel.textContent = {min_label};\n\
             \x20   minLabel.style.color = '{start_color}';\n\
             \x20   var midLabel = el('span');\n\
             \x20   midLabel.textContent = {mid_label};\n\
             \x20   midLabel.style.color = '{middle_color}';\n\
             \x20   var maxLabel = el('span');\n\
             \x20   maxLabel.textContent = {max_label};\n\
             \x20   maxLabel.style.color = '{end_color}';\n\
             \x20   labels.appendChild(minLabel);\n\
             \x20   labels.appendChild(midLabel);\n\
             \x20   labels.appendChild(maxLabel);\n\
             \x20   scale.appendChild(buttons);\n\
             \x20   scale.appendChild(labels);\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   wrapper.appendChild(question);\n\
             \x20   wrapper.appendChild(scale);\n\
             \x20   wrapper.appendChild(hidden);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(hidden.value ? [{id}, {{ value: parseInt(hidden.value, 10), minValue: {min}, maxValue: {max} }}] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            question = js_str(&attrs.question),
            min_label = js_str(&attrs.min_label),
            mid_label = js_str(&attrs.mid_label),
            max_label = js_str(&attrs.max_label),
            start_color = policy.label_color(LabelPosition::Start),
            middle_color = policy.label_color(LabelPosition::Middle),
            end_color = policy.label_color(LabelPosition::End),
            check = required_check(attrs.required, "hidden.value.length > 0"),
        ),
    );
    Ok(())
}

fn emit_dual_image(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = DualImageUploadAttributes::of(instance)?;
    let id = js_str(&instance.id);
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var container = el('div', 'quick-form-dual-image');\n\
             \x20   var side = function (sideLabel, sidePrompt, name) {{\n\
             \x20     var box = el('div', 'quick-form-dual-image-side');\n\
             \x20     var caption = el('div', 'quick-form-dual-image-label');\n\
             \x20     caption.textContent = sideLabel;\n\
             \x20     var area = el('div', 'quick-form-dual-image-upload');\n\
             \x20     area.textContent = sidePrompt;\n\
             \x20     var input = el('input');\n\
             \x20     input.type = 'file';\n\
             \x20     input.accept = 'image/*';\n\
             \x20     input.name = name;\n\
             \x20     input.style.display = 'none';\n\
             \x20     var preview = el('img', 'quick-form-dual-image-preview');\n\
             \x20     area.addEventListener('click', function () {{ input.click(); }});\n\
             \x20     input.addEventListener('change', function () {{\n\
             \x20       readFile(input.files && input.files[0]).then(function (url) {{\n\
             \x20         if (url) {{\n\
             \x20           preview.src = url;\n\
             \x20           preview.style.display = 'block';\n\
             \x20           area.style.display = 'none';\n\
             \x20         }}\n\
             \x20       }});\n\
             \x20     }});\n\
             \x20     box.appendChild(caption);\n\
             \x20     box.appendChild(area);\n\
             \x20     box.appendChild(input);\n\
             \x20     box.appendChild(preview);\n\
             \x20     container.appendChild(box);\n\
             \x20     return input;\n\
             \x20   }};\n\
             \x20   var leftInput = side({left_label}, {left_prompt}, {left_name});\n\
             \x20   var rightInput = side({right_label}, {right_prompt}, {right_name});\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   wrapper.appendChild(container);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     var leftFile = leftInput.files && leftInput.files[0];\n\
             \x20     var rightFile = rightInput.files && rightInput.files[0];\n\
             \x20     if (!leftFile && !rightFile) {{ return Promise.resolve(null); }}\n\
             \x20     return Promise.all([readFile(leftFile), readFile(rightFile)]).then(function (pair) {{\n\
             \x20       return [{id}, {{ left: pair[0], right: pair[1] }}];\n\
             \x20     }});\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            left_label = js_str(&attrs.left_label),
            left_prompt = js_str(&attrs.left_prompt),
            left_name = js_str(&format!("{}_left", instance.id)),
            right_label = js_str(&attrs.right_label),
            right_prompt = js_str(&attrs.right_prompt),
            right_name = js_str(&format!("{}_right", instance.id)),
            check = required_check(
                attrs.required,
                "!!(leftInput.files && leftInput.files.length && rightInput.files && rightInput.files.length)"
            ),
        ),
    );
    Ok(())
}

fn emit_picture_select(out: &mut String, instance: &FieldInstance) -> QuickformResult<()> {
    let attrs = PictureSelectAttributes::of(instance)?;
    let id = js_str(&instance.id);
    let images = serde_json::to_string(&attrs.images)?;
    push_block(
        out,
        &format!(
            "{head}\
             \x20   var grid = el('div', 'quick-form-picture-select');\n\
             \x20   var hidden = el('input');\n\
             \x20   hidden.type = 'hidden';\n\
             \x20   hidden.name = {id};\n\
             \x20   var selected = null;\n\
             \x20   {images}.forEach(function (image) {{\n\
             \x20     var option = el('div', 'quick-form-picture-option');\n\
             \x20     var img = el('img');\n\
             \x20     img.src = image.url;\n\
             \x20     img.alt = image.label;\n\
             \x20     option.appendChild(img);\n\
             \x20     if (image.label) {{\n\
             \x20       var caption = el('div', 'quick-form-picture-label');\n\
             \x20       caption.textContent = image.label;\n\
             \x20       option.appendChild(caption);\n\
             \x20     }}\n\
             \x20     option.addEventListener('click', function () {{\n\
             \x20       grid.querySelectorAll('.quick-form-picture-option').forEach(function (other) {{\n\
             \x20         other.classList.remove('selected');\n\
             \x20       }});\n\
             \x20       option.classList.add('selected');\n\
             \x20       selected = {{ url: image.url, label: image.label }};\n\
             \x20       hidden.value = image.url;\n\
             \x20     }});\n\
             \x20     grid.appendChild(option);\n\
             \x20   }});\n\
             \x20   wrapper.appendChild(label);\n\
             \x20   wrapper.appendChild(helper);\n\
             \x20   wrapper.appendChild(grid);\n\
             \x20   wrapper.appendChild(hidden);\n\
             \x20   form.appendChild(wrapper);\n\
             \x20   collectors.push(function () {{\n\
             \x20     return Promise.resolve(selected ? [{id}, selected] : null);\n\
             \x20   }});\n\
             {check}",
            head = label_and_helper(&attrs.label, &attrs.helper_text),
            check = required_check(attrs.required, "selected !== null"),
        ),
    );
    Ok(())
}
