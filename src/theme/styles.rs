//! Global CSS styles for bicshare.
//!
//! Dark card modal with an indigo border; dropzones are dashed panels that
//! brighten while a drag hovers them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: rgb(18, 18, 18);
  --card-bg: rgb(25, 25, 25);
  --card-border: #535892;
  --text-primary: rgb(200, 200, 200);
  --text-muted: rgba(200, 200, 200, 0.6);

  --info: #3e8ed0;
  --danger: #f14668;
  --success: #48c78e;

  --font-body: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
  --transition-fade: all 0.3s ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-body);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

hr {
  border: none;
  border-top: 1px solid rgba(83, 88, 146, 0.5);
  margin: 1rem 0;
}

/* === Upload Page === */
.upload-page {
  max-width: 60rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.upload-notice {
  margin-top: 1rem;
  font-size: 0.875rem;
}

.upload-notice--success { color: var(--success); }
.upload-notice--error { color: var(--danger); }

.upload-notice__url {
  font-family: monospace;
  word-break: break-all;
}

/* === Dropzone === */
.dropzone {
  display: block;
  padding: 2.5rem 1rem;
  border: 2px dashed var(--card-border);
  border-radius: 0.5rem;
  text-align: center;
  cursor: pointer;
  transition: var(--transition-fade);
}

.dropzone:hover,
.dropzone--active {
  border-color: #8a8fd6;
  background: rgba(83, 88, 146, 0.15);
}

.dropzone__input {
  display: none;
}

.dropzone__icon {
  margin-right: 0.5rem;
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  outline: none;
}

.upload-modal {
  width: 60rem;
  max-width: 60rem;
  max-height: 90vh;
  overflow-y: auto;
  border: 3px solid var(--card-border);
  border-radius: 0.5rem;
  background-color: var(--card-bg);
  box-shadow: 0 .5em 1em -0.125em rgba(0, 0, 0, 0.4), 0 0 0 1px rgba(0, 0, 0, 0.32);
  color: var(--text-primary);
}

.card-header {
  border-bottom: 1px solid rgba(83, 88, 146, 0.5);
}

.card-header-title {
  padding: 0.75rem 1rem;
  font-weight: 600;
}

.card-content {
  padding: 1.5rem;
}

.modal-subheader {
  margin-bottom: 0.5rem;
}

/* === Layout helpers === */
.level,
.level-left,
.level-right {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.level-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.columns.is-multiline {
  display: flex;
  flex-wrap: wrap;
}

.column.is-one-quarter {
  flex: 0 0 25%;
  padding: 0.25rem 0;
}

/* === Form controls === */
.modal-select-label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.modal-select {
  background: var(--bg);
  color: var(--text-primary);
  border: 1px solid var(--card-border);
  border-radius: 4px;
  padding: 0.2rem 0.4rem;
}

.checkbox {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  cursor: pointer;
  font-size: 0.875rem;
}

/* === Buttons === */
.btn {
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 4px;
  color: #fff;
  font-family: var(--font-body);
  cursor: pointer;
  transition: var(--transition-fade);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-info { background: var(--info); }
.btn-danger { background: var(--danger); }
.btn-success { background: var(--success); }

/* === Tooltip === */
.tooltip-anchor {
  position: relative;
  display: inline-block;
}

.tooltip {
  position: absolute;
  z-index: 2000;
  min-width: 12rem;
  padding: 0.4rem 0.6rem;
  border-radius: 3px;
  background: #222;
  color: #fff;
  font-size: 0.8rem;
  pointer-events: none;
}

.tooltip--bottom { top: calc(100% + 8px); left: 50%; transform: translateX(-50%); }
"#;
