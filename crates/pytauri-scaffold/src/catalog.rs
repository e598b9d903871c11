//! Static catalog of selectable frameworks and their language variants
//!
//! Selection is a two-step drill-down: pick a framework, then one of its
//! variants. The variant identifier is the sole key used to locate a
//! template directory on disk (`template-<variant>`).

use colored::{Color, Colorize};

/// A language-specific flavor of a framework template
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Template identifier, matches the on-disk `template-<name>` directory
    pub name: &'static str,

    /// Human-readable label shown in the variant menu
    pub display: &'static str,

    /// Presentation-only color tag
    pub color: Color,

    /// Command to delegate to instead of copying a template, if any
    pub custom_command: Option<&'static str>,
}

/// A selectable front-end framework with its variants
#[derive(Debug, Clone, Copy)]
pub struct Framework {
    pub name: &'static str,
    pub display: &'static str,
    pub color: Color,
    pub variants: &'static [Variant],
}

impl Variant {
    /// Display label with the variant's color applied
    pub fn label(&self) -> String {
        self.display.color(self.color).to_string()
    }
}

impl Framework {
    /// Display label with the framework's color applied
    pub fn label(&self) -> String {
        self.display.color(self.color).to_string()
    }
}

/// All selectable frameworks, in menu order
pub const FRAMEWORKS: &[Framework] = &[
    Framework {
        name: "vanilla",
        display: "Vanilla",
        color: Color::Yellow,
        variants: &[
            Variant {
                name: "vanilla-ts",
                display: "TypeScript",
                color: Color::Blue,
                custom_command: None,
            },
            Variant {
                name: "vanilla",
                display: "JavaScript",
                color: Color::Yellow,
                custom_command: None,
            },
        ],
    },
    Framework {
        name: "vue",
        display: "Vue",
        color: Color::Green,
        variants: &[
            Variant {
                name: "vue-ts",
                display: "TypeScript",
                color: Color::Blue,
                custom_command: None,
            },
            Variant {
                name: "vue",
                display: "JavaScript",
                color: Color::Yellow,
                custom_command: None,
            },
        ],
    },
    Framework {
        name: "react",
        display: "React",
        color: Color::Cyan,
        variants: &[
            Variant {
                name: "react-ts",
                display: "TypeScript",
                color: Color::Blue,
                custom_command: None,
            },
            Variant {
                name: "react",
                display: "JavaScript",
                color: Color::Yellow,
                custom_command: None,
            },
        ],
    },
];

/// Flattened list of every valid template identifier
pub fn template_names() -> Vec<&'static str> {
    FRAMEWORKS
        .iter()
        .flat_map(|f| f.variants.iter().map(|v| v.name))
        .collect()
}

/// Check whether an externally supplied identifier names a known template
pub fn is_valid_template(name: &str) -> bool {
    FRAMEWORKS
        .iter()
        .flat_map(|f| f.variants)
        .any(|v| v.name == name)
}

/// Colored template listing for CLI help output
pub fn help_listing() -> String {
    let mut lines = String::from("Available templates:\n");
    for framework in FRAMEWORKS {
        let names: Vec<&str> = framework.variants.iter().map(|v| v.name).collect();
        let row = format!("{:<15}{}", names[0], names[1..].join(" "));
        lines.push_str(&format!("{}\n", row.color(framework.color)));
    }
    lines
}
