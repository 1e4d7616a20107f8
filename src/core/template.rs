//! Runtime message rendering for the emit operations
//!
//! Plain emits join their arguments with a single space. Formatted emits
//! substitute arguments into `{}` placeholders in order; `{{` and `}}` produce
//! literal braces. A template that does not fit its arguments (unbalanced
//! braces, too few or too many arguments) renders as the raw template followed
//! by the arguments instead of failing.

use std::fmt::{Display, Write};

/// Separator placed between plain arguments
pub const ARG_SEPARATOR: &str = " ";

/// Concatenate displayable values with [`ARG_SEPARATOR`]
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push_str(ARG_SEPARATOR);
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Render a `{}` template, degrading to a raw rendering when malformed
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    if let Some(rendered) = try_render(template, args) {
        return rendered;
    }

    if args.is_empty() {
        template.to_string()
    } else if template.is_empty() {
        join_args(args)
    } else {
        format!("{}{}{}", template, ARG_SEPARATOR, join_args(args))
    }
}

/// Strict rendering, `None` when template and arguments disagree
pub fn try_render(template: &str, args: &[&dyn Display]) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => match chars.next() {
                Some('{') => out.push('{'),
                Some('}') => {
                    let arg = remaining.next()?;
                    write!(out, "{}", arg).ok()?;
                }
                _ => return None,
            },
            '}' => match chars.next() {
                Some('}') => out.push('}'),
                _ => return None,
            },
            _ => out.push(c),
        }
    }

    if remaining.next().is_some() {
        return None;
    }
    Some(out)
}
