//! Assembles a small admin shell in frontend mode and prints the menu tree,
//! the breadcrumb chain for a deep URL, and the active first-level tab.
//!
//! Run with: `cargo run -p portico --example admin_shell`

use std::collections::HashSet;

use portico::{
    assemble_frontend, constant_routes, find_root_menu_by_path, strip_dynamic_tail, MenuRecord,
    PageComponent, RouteNode,
};

fn main() {
    tracing_subscriber::fmt::init();

    let roots = vec![RouteNode::new("/").with_flatten(true).with_children(vec![
        RouteNode::new("home")
            .with_default_path("analysis")
            .with_title("Home")
            .with_order(1)
            .with_children(vec![
                RouteNode::new("analysis")
                    .with_component(PageComponent::Page("home/analysis".into()))
                    .with_title("Analysis"),
                RouteNode::new("workbench")
                    .with_component(PageComponent::Page("home/workbench".into()))
                    .with_title("Workbench"),
            ]),
        RouteNode::new("users")
            .with_title("Users")
            .with_order(2)
            .with_children(vec![RouteNode::new(":id")
                .with_component(PageComponent::Page("users/detail".into()))
                .with_title("User Detail")
                .with_hidden(true)]),
        RouteNode::new("admin")
            .with_title("Administration")
            .with_permission(["admin"])
            .with_children(vec![RouteNode::new("settings").with_title("Settings")]),
    ])];

    // No "admin" grant: the administration subtree disappears.
    let granted: HashSet<String> = ["dashboard"].iter().map(|s| s.to_string()).collect();
    let registry = assemble_frontend(&roots, &constant_routes(), &granted);

    println!("menu tree:");
    print_menu(&registry.menu.items, 1);

    let current_url = "/home/analysis";
    let breadcrumbs = &registry.table.get(current_url).unwrap().pathname_chain;
    println!("\nbreadcrumbs for {current_url}: {breadcrumbs:?}");

    let active = find_root_menu_by_path(&registry.menu.items, current_url, 0);
    println!("active tab: {:?}", active.root_path);

    // A hidden detail page highlights its listing parent.
    let detail = registry.table.get("/users/:id").unwrap();
    let highlight = strip_dynamic_tail(&detail.pathname, detail.meta.hide_in_menu);
    println!("detail page {} highlights {}", detail.pathname, highlight);
}

fn print_menu(items: &[MenuRecord], depth: usize) {
    for item in items {
        let name = item.name.as_deref().unwrap_or("-");
        println!("{}{} ({})", "  ".repeat(depth), name, item.path);
        print_menu(&item.children, depth + 1);
    }
}
