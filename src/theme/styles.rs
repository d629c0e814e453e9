//! Global CSS styles for Folio.
//!
//! Dark palette by default; `[data-theme="light"]` on the page root swaps
//! the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.page {
  --bg: #020817;
  --bg-raised: #0b1224;
  --border: rgba(148, 163, 184, 0.16);
  --text-primary: #e2e8f0;
  --text-muted: rgba(226, 232, 240, 0.6);
  --accent: #38bdf8;
  --accent-soft: rgba(56, 189, 248, 0.15);
  --shadow: 0 14px 30px rgba(2, 8, 23, 0.6);

  --font-sans: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.page[data-theme="light"] {
  --bg: #f8fafc;
  --bg-raised: #ffffff;
  --border: rgba(15, 23, 42, 0.12);
  --text-primary: #0f172a;
  --text-muted: rgba(15, 23, 42, 0.6);
  --accent: #0369a1;
  --accent-soft: rgba(3, 105, 161, 0.1);
  --shadow: 0 14px 30px rgba(15, 23, 42, 0.12);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

[hidden] {
  display: none !important;
}

.page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

main {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section-title {
  font-size: 1.75rem;
  margin-bottom: 1.5rem;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  font: inherit;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--bg);
  border-color: var(--accent);
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--accent);
}

.icon-btn {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  background: var(--bg);
  border-bottom: 1px solid var(--border);
}

.brand {
  font-family: var(--font-mono);
  font-weight: 700;
  letter-spacing: 0.05em;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link:hover {
  color: var(--accent);
}

.nav-actions {
  display: flex;
  gap: 0.5rem;
}

#menu-toggle {
  display: none;
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  padding: 1rem 1.5rem;
  gap: 0.75rem;
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  #menu-toggle {
    display: inline-block;
  }
}

/* === Hero === */
.hero {
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 3rem;
  align-items: center;
  padding: 5rem 0;
}

.eyebrow {
  font-family: var(--font-mono);
  color: var(--accent);
  font-size: 0.875rem;
}

.hero-title {
  font-size: 3rem;
  line-height: 1.1;
  margin: 0.75rem 0 1rem;
}

.hero-meta {
  font-family: var(--font-mono);
  color: var(--text-muted);
  min-height: 1.6em;
}

.caret {
  animation: blink 1s steps(1) infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-cta {
  display: flex;
  gap: 0.75rem;
  margin-top: 2rem;
}

.hero-art {
  perspective: 900px;
}

.device-card {
  transform: rotate(-6deg);
  transition: transform 80ms linear;
  border-radius: 18px;
  padding: 1rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.device-screen {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: 10px;
  background: var(--accent-soft);
  min-height: 220px;
}

.device-bar {
  height: 10px;
  width: 30%;
  border-radius: 5px;
  background: var(--accent);
}

.device-line {
  height: 8px;
  width: 70%;
  border-radius: 4px;
  background: var(--border);
}

.device-line.wide { width: 90%; }
.device-line.short { width: 45%; }

@media (max-width: 768px) {
  .hero {
    grid-template-columns: 1fr;
    padding: 3rem 0;
  }
}

/* === Projects === */
.projects {
  padding: 4rem 0;
}

.filters {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.filter {
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-muted);
  font: inherit;
  cursor: pointer;
}

.filter.active {
  color: var(--text-primary);
  border-color: var(--accent);
  background: var(--accent-soft);
}

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
  border-radius: 14px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.card-summary {
  color: var(--text-muted);
  flex: 1;
}

.card-tags {
  display: flex;
  gap: 0.4rem;
  list-style: none;
}

.tag {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  padding: 0.1rem 0.5rem;
  border-radius: 4px;
  background: var(--accent-soft);
  color: var(--accent);
}

.view-btn {
  align-self: flex-start;
  padding: 0.4rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--accent);
  background: transparent;
  color: var(--accent);
  font: inherit;
  cursor: pointer;
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: rgba(2, 8, 23, 0.75);
}

.modal[aria-hidden="true"] {
  visibility: hidden;
  opacity: 0;
}

.modal-dialog {
  position: relative;
  width: min(640px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  padding: 1.5rem;
  border-radius: 14px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  border: none;
  background: transparent;
  color: var(--text-muted);
  font-size: 1.1rem;
  cursor: pointer;
}

#modal-title {
  margin-bottom: 1rem;
}

/* === Contact === */
.contact {
  padding: 4rem 0;
}

.contact-form {
  display: grid;
  gap: 0.5rem;
  max-width: 560px;
}

.contact-form input,
.contact-form textarea {
  padding: 0.6rem 0.8rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
  font: inherit;
}

.contact-form button {
  margin-top: 0.75rem;
  justify-self: start;
}

.form-status {
  min-height: 1.6em;
  color: var(--accent);
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}
"#;
