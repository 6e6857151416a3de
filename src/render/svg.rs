//! SVG export of a [`RetainedScene`].
//!
//! The export reflects current (possibly mid-transition) attribute values.

use crate::core::{AxisLayout, AxisOrient};
use crate::render::{Color, NodeId, NodeKind, RetainedScene, SceneNode};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Writes every root surface of `scene` as one SVG document each, concatenated.
#[must_use]
pub fn to_svg_document(scene: &RetainedScene) -> String {
    let mut out = String::new();
    for surface in scene.surfaces() {
        write_node(scene, surface, 0, &mut out);
    }
    out
}

fn write_node(scene: &RetainedScene, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = scene.node(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    match &node.kind {
        NodeKind::Surface { width, height, .. } => {
            out.push_str(&format!(
                "{indent}<svg xmlns=\"{SVG_NS}\" width=\"{}\" height=\"{}\">\n",
                number(*width),
                number(*height)
            ));
            write_children(scene, node, depth, out);
            out.push_str(&format!("{indent}</svg>\n"));
        }
        NodeKind::Group => {
            let class = node
                .class
                .as_deref()
                .map(|class| format!(" class=\"{}\"", escape(class)))
                .unwrap_or_default();
            let transform = node.attributes.transform;
            out.push_str(&format!(
                "{indent}<g{class} transform=\"translate({},{})\">\n",
                number(transform.x),
                number(transform.y)
            ));
            write_children(scene, node, depth, out);
            if let Some(axis) = &node.axis {
                write_axis(axis, depth + 1, out);
            }
            out.push_str(&format!("{indent}</g>\n"));
        }
        NodeKind::Rect => {
            let attrs = node.attributes;
            let fill = attrs.fill.map_or_else(|| "none".to_owned(), Color::to_hex);
            let stroke = attrs.stroke.map_or_else(|| "none".to_owned(), Color::to_hex);
            out.push_str(&format!(
                "{indent}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" ry=\"{}\" \
                 style=\"fill: {fill}; stroke: {stroke}; stroke-width: {};\"/>\n",
                number(attrs.x),
                number(attrs.y),
                number(attrs.width.max(0.0)),
                number(attrs.height.max(0.0)),
                number(attrs.corner_radius_x),
                number(attrs.corner_radius_y),
                number(attrs.stroke_width),
            ));
        }
    }
}

fn write_children(scene: &RetainedScene, node: &SceneNode, depth: usize, out: &mut String) {
    for child in &node.children {
        write_node(scene, *child, depth + 1, out);
    }
}

fn write_axis(axis: &AxisLayout, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let descriptor = axis.descriptor;
    let sign = descriptor.orient.outward_sign();
    let tick = sign * descriptor.tick_size;
    let label_offset = sign * (descriptor.tick_size.max(0.0) + descriptor.tick_padding);

    for entry in &axis.ticks {
        let label = escape(&entry.label);
        let line = if descriptor.orient.is_horizontal() {
            format!(
                "<g class=\"tick\" transform=\"translate({},0)\"><line y2=\"{}\"/>\
                 <text y=\"{}\" dy=\"{}\" text-anchor=\"middle\">{label}</text></g>",
                number(entry.position),
                number(tick),
                number(label_offset),
                if descriptor.orient == AxisOrient::Top { "0em" } else { ".71em" },
            )
        } else {
            let anchor = if descriptor.orient == AxisOrient::Left {
                "end"
            } else {
                "start"
            };
            format!(
                "<g class=\"tick\" transform=\"translate(0,{})\"><line x2=\"{}\"/>\
                 <text x=\"{}\" dy=\".32em\" text-anchor=\"{anchor}\">{label}</text></g>",
                number(entry.position),
                number(tick),
                number(label_offset),
            )
        };
        out.push_str(&format!("{indent}{line}\n"));
    }

    let (start, end) = axis.range;
    let domain = if descriptor.orient.is_horizontal() {
        format!(
            "M{},{}V0H{}V{}",
            number(start),
            number(tick),
            number(end),
            number(tick)
        )
    } else {
        format!(
            "M{},{}H0V{}H{}",
            number(tick),
            number(start),
            number(end),
            number(tick)
        )
    };
    out.push_str(&format!("{indent}<path class=\"domain\" d=\"{domain}\"/>\n"));
}

fn number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        rounded.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, number};

    #[test]
    fn numbers_drop_float_noise() {
        assert_eq!(number(0.300_000_000_000_000_04), "0.3");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(375.0), "375");
    }

    #[test]
    fn labels_are_xml_escaped() {
        assert_eq!(escape("A&B <c>"), "A&amp;B &lt;c&gt;");
    }
}
