//! Component-name heuristic and the deterministic fallback template.
//!
//! When no generation API is reachable, the builder still produces a
//! usable React component: the name is guessed by keyword-matching the
//! user prompt (Russian and English keyword pairs, fixed priority
//! order) and interpolated into a fixed TSX skeleton.

/// Guess a component name from a free-text prompt.
///
/// Matching is case-insensitive and checks literal substrings in a
/// fixed priority order. Form prompts get a nested sub-check that
/// distinguishes contact and signup forms from a generic one.
///
/// # Examples
///
/// ```
/// use webforge_core::component::component_name;
///
/// assert_eq!(component_name("Add a BUTTON to the page"), "Button");
/// assert_eq!(component_name("сделай кнопку"), "Button");
/// assert_eq!(component_name("форма обратной связи"), "ContactForm");
/// assert_eq!(component_name("something else entirely"), "Component");
/// ```
pub fn component_name(prompt: &str) -> &'static str {
    let p = prompt.to_lowercase();

    if p.contains("форм") || p.contains("form") {
        if p.contains("контакт") || p.contains("обратн") {
            "ContactForm"
        } else if p.contains("регистр") || p.contains("sign") {
            "SignupForm"
        } else {
            "CustomForm"
        }
    } else if p.contains("кнопк") || p.contains("button") {
        "Button"
    } else if p.contains("карточ") || p.contains("card") {
        "Card"
    } else if p.contains("меню") || p.contains("menu") {
        "Menu"
    } else if p.contains("хедер") || p.contains("header") {
        "Header"
    } else if p.contains("футер") || p.contains("footer") {
        "Footer"
    } else if p.contains("галер") || p.contains("gallery") {
        "Gallery"
    } else if p.contains("слайдер") || p.contains("slider") {
        "Slider"
    } else if p.contains("модал") || p.contains("modal") {
        "Modal"
    } else {
        "Component"
    }
}

/// A component produced by the local template path.
#[derive(Debug, Clone)]
pub struct TemplateComponent {
    pub component_name: &'static str,
    pub file_path: String,
    pub content: String,
}

/// Render the deterministic component template for a prompt.
///
/// The derived name is interpolated into the props interface, the
/// component identifier, and the default export; the literal prompt is
/// embedded as display text.
pub fn render_template(prompt: &str) -> TemplateComponent {
    let name = component_name(prompt);

    let content = format!(
        r#"import React from 'react';

interface {name}Props {{
  className?: string;
}}

export const {name}: React.FC<{name}Props> = ({{ className }}) => {{
  return (
    <div className={{`${{className || ''}}`}}>
      <h2 className="text-2xl font-bold mb-4">{name}</h2>
      <p className="text-gray-600">
        Generated from prompt: "{prompt}"
      </p>
    </div>
  );
}};

export default {name};
"#
    );

    TemplateComponent {
        component_name: name,
        file_path: format!("src/components/{name}.tsx"),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_english() {
        assert_eq!(component_name("add a button"), "Button");
    }

    #[test]
    fn button_russian() {
        assert_eq!(component_name("создай кнопку отправки"), "Button");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(component_name("Add A BUTTON"), "Button");
        assert_eq!(component_name("КНОПКА"), "Button");
    }

    #[test]
    fn contact_form_beats_generic_form() {
        assert_eq!(component_name("форма для контактов"), "ContactForm");
        assert_eq!(component_name("form обратной связи"), "ContactForm");
    }

    #[test]
    fn signup_form() {
        assert_eq!(component_name("signup form"), "SignupForm");
        assert_eq!(component_name("форма регистрации"), "SignupForm");
    }

    #[test]
    fn generic_form() {
        assert_eq!(component_name("просто форма"), "CustomForm");
    }

    #[test]
    fn form_wins_over_button() {
        // Priority order: the form branch is checked first.
        assert_eq!(component_name("form with a button"), "CustomForm");
    }

    #[test]
    fn remaining_keywords() {
        assert_eq!(component_name("карточка товара"), "Card");
        assert_eq!(component_name("dropdown menu"), "Menu");
        assert_eq!(component_name("site header"), "Header");
        assert_eq!(component_name("футер сайта"), "Footer");
        assert_eq!(component_name("фото галерея"), "Gallery");
        assert_eq!(component_name("image slider"), "Slider");
        assert_eq!(component_name("модальное окно"), "Modal");
    }

    #[test]
    fn default_name() {
        assert_eq!(component_name("nothing recognizable here"), "Component");
    }

    #[test]
    fn template_interpolates_name_and_prompt() {
        let out = render_template("красивая кнопка");
        assert_eq!(out.component_name, "Button");
        assert_eq!(out.file_path, "src/components/Button.tsx");
        assert!(out.content.contains("interface ButtonProps"));
        assert!(out.content.contains("export const Button: React.FC<ButtonProps>"));
        assert!(out.content.contains("export default Button;"));
        assert!(out.content.contains("красивая кнопка"));
    }

    #[test]
    fn template_is_deterministic() {
        let a = render_template("button");
        let b = render_template("button");
        assert_eq!(a.content, b.content);
    }
}
