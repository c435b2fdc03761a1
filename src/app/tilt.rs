use leptos::{ev::MouseEvent, html, prelude::*};

/// Rotation (in degrees) for a pointer at `(offset_x, offset_y)` inside an
/// element of `width` x `height`. Centered pointer means no tilt; the
/// edges reach the full `max_degrees`. Pointer below center tips the card
/// away, matching a physical surface pushed where the pointer sits.
pub fn tilt_rotation(
    offset_x: f64,
    offset_y: f64,
    width: f64,
    height: f64,
    max_degrees: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x_pct = (offset_x / width - 0.5).clamp(-0.5, 0.5);
    let y_pct = (offset_y / height - 0.5).clamp(-0.5, 0.5);
    let rotate_x = -y_pct * 2.0 * max_degrees;
    let rotate_y = x_pct * 2.0 * max_degrees;
    (rotate_x, rotate_y)
}

pub fn tilt_style(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "transform: perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg); transform-style: preserve-3d; transition: transform 150ms ease-out"
    )
}

/// Wraps its children in a div that tilts toward the pointer.
#[component]
pub fn TiltBox(
    #[prop(optional, into)] class: String,
    #[prop(default = 10.0)] max_degrees: f64,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (rotation, set_rotation) = signal((0.0f64, 0.0f64));

    let on_move = move |ev: MouseEvent| {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let rotation = tilt_rotation(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
            max_degrees,
        );
        set_rotation(rotation);
    };
    let on_leave = move |_| set_rotation((0.0, 0.0));

    view! {
        <div
            node_ref=node
            class=class
            on:mousemove=on_move
            on:mouseleave=on_leave
            style=move || {
                let (rx, ry) = rotation();
                tilt_style(rx, ry)
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_has_no_tilt() {
        assert_eq!(tilt_rotation(50.0, 50.0, 100.0, 100.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_full_rotation() {
        // top-left: card tips up and to the left
        assert_eq!(tilt_rotation(0.0, 0.0, 100.0, 100.0, 10.0), (10.0, -10.0));
        // bottom-right
        assert_eq!(
            tilt_rotation(100.0, 100.0, 100.0, 100.0, 10.0),
            (-10.0, 10.0)
        );
    }

    #[test]
    fn pointer_outside_bounds_is_clamped() {
        let (rx, ry) = tilt_rotation(250.0, -80.0, 100.0, 100.0, 15.0);
        assert_eq!((rx, ry), (15.0, 15.0));
    }

    #[test]
    fn degenerate_element_yields_no_tilt() {
        assert_eq!(tilt_rotation(10.0, 10.0, 0.0, 100.0, 10.0), (0.0, 0.0));
        assert_eq!(tilt_rotation(10.0, 10.0, 100.0, 0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn rotation_scales_with_pointer_offset() {
        let (quarter_x, _) = tilt_rotation(50.0, 25.0, 100.0, 100.0, 10.0);
        let (edge_x, _) = tilt_rotation(50.0, 0.0, 100.0, 100.0, 10.0);
        assert_eq!(quarter_x, 5.0);
        assert_eq!(edge_x, 10.0);
    }

    #[test]
    fn style_embeds_both_angles() {
        let style = tilt_style(2.5, -7.25);
        assert!(style.contains("rotateX(2.50deg)"));
        assert!(style.contains("rotateY(-7.25deg)"));
    }
}
