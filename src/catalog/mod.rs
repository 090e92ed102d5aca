//! The built-in component catalog: the same entries a design-system site
//! ships as per-page example arrays, embedded here as static data.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::{Display, EnumIter};

/// Category a component is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ComponentKind {
    #[strum(serialize = "Form")]
    Form,
    #[strum(serialize = "Overlay")]
    Overlay,
    #[strum(serialize = "Data display")]
    DataDisplay,
    #[strum(serialize = "Navigation")]
    Navigation,
    #[strum(serialize = "Feedback")]
    Feedback,
}

/// One catalog entry: a named component with its embedded JSX source.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: ComponentKind,
    pub description: &'static str,
    pub source: &'static str,
}

pub static COMPONENTS: &[Component] = &[
    Component {
        name: "button",
        title: "Button",
        kind: ComponentKind::Form,
        description: "Primary action button with hover and disabled states",
        source: r#"export function Button({ children, disabled, onClick }) {
  return (
    <button
      className="px-4 py-2 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
      disabled={disabled}
      onClick={onClick}
    >
      {children}
    </button>
  );
}"#,
    },
    Component {
        name: "text-input",
        title: "Text Input",
        kind: ComponentKind::Form,
        description: "Labelled single-line input with helper text",
        source: r#"export function TextInput({ label, helper, value, onChange }) {
  return (
    <label className="block">
      <span className="text-sm font-medium text-gray-700">{label}</span>
      <input
        className="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
        value={value}
        onChange={onChange}
      />
      {helper && <span className="mt-1 text-xs text-gray-500">{helper}</span>}
    </label>
  );
}"#,
    },
    Component {
        name: "select",
        title: "Select",
        kind: ComponentKind::Form,
        description: "Native select dressed to match the input family",
        source: r#"export function Select({ label, options, value, onChange }) {
  return (
    <label className="block">
      <span className="text-sm font-medium text-gray-700">{label}</span>
      <select
        className="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500"
        value={value}
        onChange={onChange}
      >
        {options.map((option) => (
          <option key={option.value} value={option.value}>
            {option.label}
          </option>
        ))}
      </select>
    </label>
  );
}"#,
    },
    Component {
        name: "modal",
        title: "Modal",
        kind: ComponentKind::Overlay,
        description: "Centered dialog with backdrop and close affordance",
        source: r#"export function Modal({ open, title, children, onClose }) {
  if (!open) return null;
  return (
    <div className="fixed inset-0 z-50 flex items-center justify-center bg-black/50" onClick={onClose}>
      <div
        className="w-full max-w-md rounded-xl bg-white p-6 shadow-xl"
        onClick={(e) => e.stopPropagation()}
      >
        <div className="flex items-center justify-between">
          <h2 className="text-lg font-semibold">{title}</h2>
          <button className="text-gray-400 hover:text-gray-600" onClick={onClose}>
            &times;
          </button>
        </div>
        <div className="mt-4">{children}</div>
      </div>
    </div>
  );
}"#,
    },
    Component {
        name: "tooltip",
        title: "Tooltip",
        kind: ComponentKind::Overlay,
        description: "Hover tooltip positioned above its trigger",
        source: r#"export function Tooltip({ text, children }) {
  return (
    <span className="group relative inline-block">
      {children}
      <span className="pointer-events-none absolute bottom-full left-1/2 mb-2 -translate-x-1/2 whitespace-nowrap rounded bg-gray-900 px-2 py-1 text-xs text-white opacity-0 transition-opacity group-hover:opacity-100">
        {text}
      </span>
    </span>
  );
}"#,
    },
    Component {
        name: "table",
        title: "Table",
        kind: ComponentKind::DataDisplay,
        description: "Striped data table with column headers",
        source: r#"export function Table({ columns, rows }) {
  return (
    <table className="min-w-full divide-y divide-gray-200">
      <thead className="bg-gray-50">
        <tr>
          {columns.map((column) => (
            <th key={column} className="px-4 py-2 text-left text-xs font-medium uppercase text-gray-500">
              {column}
            </th>
          ))}
        </tr>
      </thead>
      <tbody className="divide-y divide-gray-100">
        {rows.map((row, i) => (
          <tr key={i} className="odd:bg-white even:bg-gray-50">
            {row.map((cell, j) => (
              <td key={j} className="px-4 py-2 text-sm text-gray-700">{cell}</td>
            ))}
          </tr>
        ))}
      </tbody>
    </table>
  );
}"#,
    },
    Component {
        name: "card",
        title: "Card",
        kind: ComponentKind::DataDisplay,
        description: "Content card with optional header and footer slots",
        source: r#"export function Card({ header, footer, children }) {
  return (
    <div className="overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm">
      {header && <div className="border-b border-gray-200 px-4 py-3 font-medium">{header}</div>}
      <div className="px-4 py-4">{children}</div>
      {footer && <div className="border-t border-gray-200 bg-gray-50 px-4 py-3">{footer}</div>}
    </div>
  );
}"#,
    },
    Component {
        name: "accordion",
        title: "Accordion",
        kind: ComponentKind::DataDisplay,
        description: "Expandable sections, one open at a time",
        source: r#"export function Accordion({ items }) {
  const [openIndex, setOpenIndex] = useState(null);
  return (
    <div className="divide-y divide-gray-200 rounded-lg border border-gray-200">
      {items.map((item, i) => (
        <div key={i}>
          <button
            className="flex w-full items-center justify-between px-4 py-3 text-left font-medium hover:bg-gray-50"
            onClick={() => setOpenIndex(openIndex === i ? null : i)}
          >
            {item.title}
            <span>{openIndex === i ? "−" : "+"}</span>
          </button>
          {openIndex === i && <div className="px-4 pb-4 text-sm text-gray-600">{item.body}</div>}
        </div>
      ))}
    </div>
  );
}"#,
    },
    Component {
        name: "tabs",
        title: "Tabs",
        kind: ComponentKind::Navigation,
        description: "Horizontal tab list driving a content panel",
        source: r#"export function Tabs({ tabs }) {
  const [active, setActive] = useState(0);
  return (
    <div>
      <nav className="flex gap-4 border-b border-gray-200">
        {tabs.map((tab, i) => (
          <button
            key={tab.label}
            className={
              i === active
                ? "border-b-2 border-blue-600 px-1 py-2 text-sm font-medium text-blue-600"
                : "border-b-2 border-transparent px-1 py-2 text-sm font-medium text-gray-500 hover:text-gray-700"
            }
            onClick={() => setActive(i)}
          >
            {tab.label}
          </button>
        ))}
      </nav>
      <div className="py-4">{tabs[active].content}</div>
    </div>
  );
}"#,
    },
    Component {
        name: "badge",
        title: "Badge",
        kind: ComponentKind::DataDisplay,
        description: "Small status label in semantic colors",
        source: r#"export function Badge({ tone = "neutral", children }) {
  const tones = {
    neutral: "bg-gray-100 text-gray-700",
    success: "bg-green-100 text-green-700",
    warning: "bg-yellow-100 text-yellow-700",
    danger: "bg-red-100 text-red-700",
  };
  return (
    <span className={`inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium ${tones[tone]}`}>
      {children}
    </span>
  );
}"#,
    },
    Component {
        name: "alert",
        title: "Alert",
        kind: ComponentKind::Feedback,
        description: "Inline alert banner with icon and dismiss button",
        source: r#"export function Alert({ tone = "info", children, onDismiss }) {
  const tones = {
    info: "bg-blue-50 text-blue-800 border-blue-200",
    success: "bg-green-50 text-green-800 border-green-200",
    error: "bg-red-50 text-red-800 border-red-200",
  };
  return (
    <div className={`flex items-start justify-between rounded-lg border p-4 text-sm ${tones[tone]}`} role="alert">
      <div>{children}</div>
      {onDismiss && (
        <button className="ml-4 opacity-60 hover:opacity-100" onClick={onDismiss}>
          &times;
        </button>
      )}
    </div>
  );
}"#,
    },
];

static BY_NAME: Lazy<HashMap<String, &'static Component>> = Lazy::new(|| {
    COMPONENTS
        .iter()
        .map(|component| (component.name.to_lowercase(), component))
        .collect()
});

pub fn all() -> &'static [Component] {
    COMPONENTS
}

/// Case-insensitive lookup by catalog name.
pub fn find(name: &str) -> Option<&'static Component> {
    BY_NAME.get(&name.trim().to_lowercase()).copied()
}
