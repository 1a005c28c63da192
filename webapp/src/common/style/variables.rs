// light palette, the baseline
pub const CSS_VARIABLES: &str = r#"
.portfolio {
  /* Color System */
  --primary: #2563EB;
  --primary-light: #3B82F6;
  --primary-dark: #1D4ED8;
  --cyan: #06B6D4;

  /* Accents, one per skill category */
  --blue: #2563EB;
  --blue-soft: #EFF6FF;
  --emerald: #059669;
  --emerald-soft: #ECFDF5;
  --amber: #D97706;
  --amber-soft: #FFFBEB;
  --violet: #7C3AED;
  --violet-soft: #F5F3FF;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-alt: #F8FAFC;
  --surface: #FFFFFF;
  --muted: #E2E8F0;

  /* Text Colors */
  --text-primary: #0F172A;
  --text-secondary: #64748B;
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: #E2E8F0;

  /* Layout */
  --header-height: 64px;
  --container-width: 1024px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);

  color: var(--text-primary);
  background-color: var(--background);
}"#;

// overrides applied when the root container carries the theme class
pub const DARK_VARIABLES: &str = r#"
.portfolio.dark {
  --blue-soft: rgba(23, 37, 84, 0.3);
  --emerald-soft: rgba(2, 44, 34, 0.3);
  --amber-soft: rgba(69, 26, 3, 0.3);
  --violet-soft: rgba(46, 16, 101, 0.3);

  --background: #020617;
  --background-alt: rgba(15, 23, 42, 0.5);
  --surface: #0F172A;
  --muted: #1E293B;

  --text-primary: #F8FAFC;
  --text-secondary: #94A3B8;

  --border: #1E293B;
}"#;
