pub const SECTION_STYLES: &str = r#"
/* Page Layout */
.portfolio {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-main {
  flex: 1;
}

.page-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: var(--space-8) 0;
  background-color: var(--background);
}

.page-section.alt {
  background-color: var(--background-alt);
}

.section-inner {
  width: 100%;
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-8);
}

.section-header h2 {
  font-size: 1.875rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-top: var(--space-2);
}

.grid-2 {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-3);
}

.grid-3 {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-3);
}

@media (min-width: 768px) {
  .grid-2 {
    grid-template-columns: repeat(2, 1fr);
  }
}

/* Navigation */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: transparent;
  transition: all var(--transition-normal) var(--easing-standard);
}

.site-header.scrolled {
  background-color: var(--surface);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-lg);
  border-bottom: 1px solid var(--border);
}

.nav-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
}

.nav-logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.nav-dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background: linear-gradient(to right, #2563EB, #06B6D4);
}

.nav-links {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.menu-toggle {
  display: inline-flex;
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-4) 0;
  border-top: 1px solid var(--border);
  background-color: var(--surface);
}

.mobile-menu .nav-link {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
}

.mobile-menu .nav-link:hover {
  background-color: var(--muted);
}

.mobile-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: 0 var(--space-4);
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-menu {
    display: none;
  }
}

/* Hero */
.hero {
  position: relative;
  height: 100vh;
  overflow: hidden;
  justify-content: center;
}

.hero-content {
  position: relative;
  z-index: 1;
  max-width: 64rem;
  margin: 0 auto;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.hero-title .name {
  display: block;
  background: linear-gradient(to right, #2563EB, #06B6D4, #2563EB);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-role {
  font-size: 1.5rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.hero-tagline {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-3);
}

.focus-card {
  text-align: center;
  padding: var(--space-3);
}

.focus-card .label {
  font-size: 0.75rem;
  font-weight: 600;
}

.social-links {
  display: flex;
  gap: var(--space-2);
}

.social-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  font-size: 0.75rem;
  font-weight: 600;
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  width: 24px;
  height: 40px;
  border: 2px solid var(--border);
  border-radius: var(--radius-full);
  animation: bounce 1s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, -25%); }
  50% { transform: translate(-50%, 0); }
}

/* About */
.about-text p {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: var(--space-2);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
  text-align: center;
}

.stat-label {
  font-size: 0.75rem;
  color: var(--text-secondary);
  text-align: center;
}

.highlight-card h3 {
  font-size: 0.875rem;
  font-weight: 600;
}

.highlight-card p {
  font-size: 0.75rem;
  color: var(--text-secondary);
}

/* Skills */
.skill-card h3 {
  font-size: 0.75rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.skill-row {
  display: flex;
  justify-content: space-between;
  font-size: 0.75rem;
}

.skill-level {
  color: var(--text-secondary);
}

.skill-track {
  width: 100%;
  height: 4px;
  border-radius: var(--radius-full);
  background-color: var(--muted);
  overflow: hidden;
  margin-bottom: var(--space-2);
}

.skill-fill {
  height: 100%;
  border-radius: var(--radius-full);
  transition: width 1s ease-out;
}

/* Projects */
.project-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: var(--space-2);
}

.project-head h3 {
  font-size: 0.875rem;
  font-weight: 600;
}

.project-links {
  display: flex;
  gap: var(--space-1);
  font-size: 0.75rem;
}

.project-desc {
  font-size: 0.75rem;
  color: var(--text-secondary);
  margin: var(--space-2) 0;
}

.tech-stack {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.feature-list {
  list-style: none;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.feature-list li::before {
  content: "\2713";
  color: var(--primary);
  margin-right: var(--space-2);
}

.projects-trailer {
  margin-top: var(--space-6);
  text-align: center;
}

/* Education */
.education-entry {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-2);
}

.education-entry h3 {
  font-size: 1rem;
  font-weight: 600;
}

.education-entry .meta {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.score {
  text-align: right;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-lg);
  background-color: var(--blue-soft);
  font-size: 0.75rem;
}

.score .value {
  color: var(--primary);
  font-weight: 500;
}

/* Contact */
.contact-card {
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  font-size: 0.75rem;
}

.cta-card {
  margin-top: var(--space-4);
  background-color: var(--blue-soft);
}

.cta-card h3 {
  font-size: 0.875rem;
  font-weight: 700;
}

.cta-card p {
  font-size: 0.75rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

/* Footer */
.site-footer {
  background: linear-gradient(to bottom, #0F172A, #020617, #000000);
  color: #FFFFFF;
  padding: var(--space-12) 0;
  border-top: 1px solid rgba(59, 130, 246, 0.2);
}

.footer-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

.footer-blurb {
  font-size: 0.875rem;
  color: #94A3B8;
  max-width: 20rem;
}

.footer-bar {
  width: 48px;
  height: 4px;
  border-radius: var(--radius-full);
  background: linear-gradient(to right, #F59E0B, #3B82F6, #06B6D4);
  margin: var(--space-2) 0 var(--space-4);
}

.footer-social a {
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background-color: #1E293B;
  font-size: 0.75rem;
}

.footer-sign-off {
  text-align: center;
  font-size: 0.75rem;
  color: #64748B;
}

/* Scroll to top */
.scroll-top {
  position: fixed;
  bottom: var(--space-8);
  right: var(--space-8);
  z-index: 40;
  padding: var(--space-3);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-lg);
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.scroll-top:hover {
  background-color: var(--primary-dark);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
