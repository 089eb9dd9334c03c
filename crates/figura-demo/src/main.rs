use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use figura_graph::prelude::*;

/// Rotation angles applied to group B and then group A.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Angles {
    group_b: f64,
    group_a: f64,
}

impl Default for Angles {
    fn default() -> Self {
        Self { group_b: 90.0, group_a: 15.0 }
    }
}

/// Reads up to two positional angles; missing ones keep their default.
fn parse_angles(mut args: impl Iterator<Item = String>) -> Result<Angles> {
    let mut angles = Angles::default();
    if let Some(raw) = args.next() {
        angles.group_b = raw
            .parse()
            .with_context(|| format!("invalid rotation angle for group B: {raw:?}"))?;
    }
    if let Some(raw) = args.next() {
        angles.group_a = raw
            .parse()
            .with_context(|| format!("invalid rotation angle for group A: {raw:?}"))?;
    }
    Ok(angles)
}

fn section(title: &str, out: &mut DrawList, op: impl FnOnce(&mut DrawList)) {
    println!();
    println!("  [*] ==> {title}");
    out.clear();
    op(out);
    for cmd in out.cmds() {
        println!("      {cmd}");
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::from_env());

    let angles = parse_angles(std::env::args().skip(1))?;
    log::info!("rotating group B by {} and group A by {}", angles.group_b, angles.group_a);

    println!("=== Objects construction ===");

    // Lives in this scope; group B only aliases it.
    let triangle_b3 = Triangle::new("triangleB3");

    let group_b = Rc::new(RefCell::new(Group::new("groupB")));
    {
        let mut b = group_b.borrow_mut();
        b.add_boxed(Box::new(Triangle::new("triangleB1")));
        b.add_new::<Triangle>("triangleB2");
        b.add_new::<Line>("lineB1");
        b.add_new::<Line>("lineB2");
        b.add_borrowed(&triangle_b3);
    }

    let mut group_a = Group::new("groupA");
    group_a.add_boxed(Box::new(Triangle::new("triangleA1")));
    group_a.add_owned(Line::new("lineA1"));
    group_a.add_new::<Line>("lineA2");
    group_a.add_shared(group_b.clone());

    println!("=== End of object construction ===");
    println!();
    println!("Total of elements of groupA = {}", count_elements(&group_a));
    println!("Total of elements of groupB = {}", count_elements(&group_b.borrow()));
    println!("Nesting depth of groupA     = {}", depth(&group_a));

    let mut out = DrawList::new();
    section("Draw group B", &mut out, |out| group_b.borrow().draw(out));
    section("Rotate group B", &mut out, |out| group_b.borrow().rotate(angles.group_b, out));
    section("Draw group A", &mut out, |out| group_a.draw(out));
    section("Rotate group A", &mut out, |out| group_a.rotate(angles.group_a, out));

    println!();
    println!("  [*] ==> Remove objects from group B");
    group_b.borrow_mut().clear();
    section("Draw group A", &mut out, |out| group_a.draw(out));

    let removed = group_a
        .remove_by_id("lineA1")
        .context("groupA should still own lineA1")?;
    log::info!("removed {:?} child {}", removed.ownership(), removed.node().id());
    println!();
    println!("Total of elements of groupA = {}", count_elements(&group_a));

    println!("=== End of Program ===");
    Ok(())
}
