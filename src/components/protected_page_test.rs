use super::*;

#[test]
fn gate_content_renders_children_when_given() {
    assert_eq!(gate_content(GateDecision::Render, true), GateContent::Children);
}

#[test]
fn gate_content_falls_back_to_outlet_without_children() {
    assert_eq!(gate_content(GateDecision::Render, false), GateContent::Outlet);
}

#[test]
fn gate_content_hides_everything_unless_rendering() {
    for has_children in [true, false] {
        assert_eq!(gate_content(GateDecision::Wait, has_children), GateContent::Nothing);
        assert_eq!(gate_content(GateDecision::Redirect, has_children), GateContent::Nothing);
    }
}
