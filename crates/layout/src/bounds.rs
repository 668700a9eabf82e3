use crate::types::SimNode;

/// Pull a node back onto the circle of `radius` around the origin if it strayed
/// outside, keeping its angle from the center. Returns whether it moved.
pub fn clamp_to_circle(node: &mut SimNode, radius: f64) -> bool {
    let distance = node.x.hypot(node.y);
    if distance <= radius {
        return false;
    }
    let angle = node.y.atan2(node.x);
    node.x = radius * angle.cos();
    node.y = radius * angle.sin();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_untouched() {
        let mut node = SimNode::at(1.0, 3.0, 4.0);
        assert!(!clamp_to_circle(&mut node, 5.0));
        assert_eq!((node.x, node.y), (3.0, 4.0));
    }

    #[test]
    fn test_outside_keeps_direction() {
        let mut node = SimNode::at(1.0, 30.0, 40.0);
        assert!(clamp_to_circle(&mut node, 10.0));
        assert!((node.x - 6.0).abs() < 1e-9);
        assert!((node.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_quadrant() {
        let mut node = SimNode::at(1.0, -300.0, 0.0);
        clamp_to_circle(&mut node, 100.0);
        assert!((node.x + 100.0).abs() < 1e-9);
        assert!(node.y.abs() < 1e-9);
    }
}
