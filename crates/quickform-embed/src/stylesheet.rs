//! The fixed stylesheet shipped inside every embed bundle.
//!
//! Host pages cannot be relied on for any styling, so the bundle injects
//! this block once per page. Every selector is namespaced under
//! `quick-form-` to keep clear of arbitrary host-page CSS. Rating-button
//! colors are set per button through `--quick-form-*` custom properties so
//! the one stylesheet serves every color scheme.
//!
//! Note: the per-form theme selection is deliberately not reflected here;
//! embedded forms always use this fixed look while the hosted submission
//! page applies the selected theme.

/// The stylesheet text, injected as a single `<style>` element.
pub const EMBED_STYLESHEET: &str = "\
/* Base form styles */
.quick-form-container { width: 100%; }
.quick-form { max-width: 600px; margin: 0 auto; padding: 20px; font-family: system-ui, -apple-system, sans-serif; }
.quick-form-field { margin-bottom: 20px; }

/* Typography */
.quick-form-title { font-size: 24px; font-weight: bold; margin-bottom: 10px; color: #111827; }
.quick-form-subtitle { font-size: 18px; color: #4B5563; margin-bottom: 15px; }
.quick-form-paragraph { color: #374151; margin: 0; }
.quick-form-label { display: block; margin-bottom: 5px; font-weight: 500; color: #374151; }
.quick-form-helper-text { font-size: 14px; color: #6B7280; margin-top: 4px; }
.quick-form-separator { border: none; border-top: 1px solid #E5E7EB; }

/* Form elements */
.quick-form-input {
  width: 100%;
  padding: 8px 12px;
  border: 1px solid #D1D5DB;
  border-radius: 6px;
  font-size: 14px;
  line-height: 1.5;
  box-sizing: border-box;
  transition: border-color 0.15s ease-in-out;
}
.quick-form-input:focus {
  outline: none;
  border-color: #6366f1;
  box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.1);
}
.quick-form-input::placeholder {
  color: #9CA3AF;
}

.quick-form-checkbox-wrapper { display: flex; align-items: center; gap: 8px; }
.quick-form-checkbox {
  width: 16px;
  height: 16px;
  border: 2px solid #D1D5DB;
  border-radius: 4px;
  cursor: pointer;
  accent-color: #6366f1;
}
.quick-form-checkbox:hover { border-color: #6366f1; }
.quick-form-checkbox:focus {
  outline: 2px solid transparent;
  outline-offset: 2px;
  box-shadow: 0 0 0 2px #E0E7FF;
}

/* Submit button */
.quick-form-submit {
  background: #6366f1;
  color: white;
  padding: 8px 16px;
  border: none;
  border-radius: 6px;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.15s ease-in-out;
}
.quick-form-submit:hover {
  background: #4f46e5;
}
.quick-form-submit:focus {
  outline: none;
  box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.3);
}
.quick-form-submit:disabled {
  opacity: 0.6;
  cursor: default;
}
.quick-form-error {
  color: #ef4444;
  font-size: 14px;
  margin-top: 4px;
}

/* Validation states */
.quick-form-field-invalid .quick-form-label { color: #ef4444; }
.quick-form-field-invalid .quick-form-input,
.quick-form-field-invalid .quick-form-image-upload,
.quick-form-field-invalid .quick-form-dual-image-upload { border-color: #ef4444; }

/* Image upload */
.quick-form-image-upload {
  border: 2px dashed #D1D5DB;
  padding: 20px;
  text-align: center;
  border-radius: 8px;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #F9FAFB;
  color: #6B7280;
  transition: all 0.2s ease;
}
.quick-form-image-upload:hover {
  border-color: #6366F1;
  background: #F3F4F6;
}
.quick-form-image-preview {
  max-width: 100%;
  margin-top: 10px;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}

/* Picture select */
.quick-form-picture-select {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
  gap: 12px;
  margin-top: 8px;
}
.quick-form-picture-option {
  cursor: pointer;
  border: 2px solid transparent;
  padding: 4px;
  border-radius: 8px;
  transition: all 0.2s ease;
  background: white;
}
.quick-form-picture-option:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.quick-form-picture-option.selected {
  border-color: #6366F1;
  background: #F3F4F6;
}
.quick-form-picture-option img {
  width: 100%;
  height: 150px;
  object-fit: cover;
  border-radius: 6px;
}
.quick-form-picture-option .quick-form-picture-label {
  margin-top: 4px;
  text-align: center;
  font-size: 14px;
  color: #4B5563;
}

/* Rating scale */
.quick-form-rating-scale {
  display: flex;
  flex-direction: column;
  gap: 8px;
  margin-top: 8px;
}
.quick-form-rating-question {
  font-weight: 500;
  color: #111827;
  text-align: center;
}
.quick-form-rating-buttons {
  display: flex;
  gap: 8px;
  justify-content: space-between;
  align-items: center;
}
.quick-form-rating-button {
  width: 40px;
  height: 40px;
  border: 2px solid #D1D5DB;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
  background: white;
  color: #111827;
  transition: all 0.2s ease;
  font-weight: 500;
}
.quick-form-rating-button:hover {
  transform: translateY(-2px);
  border-color: var(--quick-form-hover-border, #6366F1);
}
.quick-form-rating-button.selected {
  background: var(--quick-form-selected-bg, #6366F1);
  border-color: var(--quick-form-selected-border, #6366F1);
  color: white;
}
.quick-form-rating-labels {
  display: flex;
  justify-content: space-between;
  color: #6B7280;
  font-size: 14px;
}

/* Dual image upload */
.quick-form-dual-image {
  display: flex;
  gap: 16px;
  margin-top: 8px;
}
.quick-form-dual-image-side {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 8px;
}
.quick-form-dual-image-upload {
  border: 2px dashed #D1D5DB;
  padding: 20px;
  text-align: center;
  border-radius: 8px;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #F9FAFB;
  color: #6B7280;
  transition: all 0.2s ease;
  min-height: 200px;
}
.quick-form-dual-image-upload:hover {
  border-color: #6366F1;
  background: #F3F4F6;
}
.quick-form-dual-image-preview {
  max-width: 100%;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0,0,0,0.1);
  display: none;
}
.quick-form-dual-image-label {
  font-weight: 500;
  color: #4B5563;
  font-size: 14px;
}
";
