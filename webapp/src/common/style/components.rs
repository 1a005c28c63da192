pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.3);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  border-color: var(--amber);
  color: var(--amber);
}

.btn-block {
  width: 100%;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border-radius: var(--radius-lg);
  background: transparent;
  border: none;
  color: inherit;
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
}

.icon-btn:hover {
  background-color: var(--muted);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 2px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  transition: border-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  border-color: var(--primary-light);
  box-shadow: var(--shadow-lg);
}

.card-dashed {
  border-style: dashed;
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  padding: 2px var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 500;
  background-color: var(--muted);
  color: var(--text-primary);
}

.badge-outline {
  background-color: var(--blue-soft);
  border: 1px solid var(--primary-light);
}

.separator {
  height: 1px;
  width: 100%;
  background-color: var(--border);
  margin: var(--space-2) 0;
}

/* Accent helpers, keyed by skill category colour */
.accent-blue { color: var(--blue); }
.accent-emerald { color: var(--emerald); }
.accent-amber { color: var(--amber); }
.accent-violet { color: var(--violet); }

.soft-blue { background-color: var(--blue-soft); }
.soft-emerald { background-color: var(--emerald-soft); }
.soft-amber { background-color: var(--amber-soft); }
.soft-violet { background-color: var(--violet-soft); }

.bar-blue { background: linear-gradient(to right, #2563EB, #06B6D4); }
.bar-emerald { background: linear-gradient(to right, #059669, #14B8A6); }
.bar-amber { background: linear-gradient(to right, #F59E0B, #F97316); }
.bar-violet { background: linear-gradient(to right, #7C3AED, #A855F7); }
"#;
