//! Declares a small service diagram and renders it next to the working
//! directory. Run with `cargo run --example quickstart`.

use armature::{Category, Diagram, OutputFormat, RenderError};

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let mut diagram = Diagram::new("Order Service")
        .with_filename("order_service")
        .with_format(OutputFormat::Svg);

    let gateway = diagram.node("Public API", Category::ApiGateway);
    let (orders, billing) = {
        let mut services = diagram.cluster("Service Tier");
        (
            services.node("Orders", Category::Compute),
            services.node("Billing", Category::Compute),
        )
    };
    let ledger = diagram.node("Ledger", Category::Database);

    diagram.connect(gateway, orders);
    diagram.connect(orders, billing);
    diagram.connect(billing, ledger);

    println!("{}", diagram.dot_source()?);

    let path = diagram.render()?;
    println!("written to {}", path.display());
    Ok(())
}
