//! The Amazon Lex airline solution architecture.
//!
//! Declares the fixed component graph of the Lex-based airline chatbot: the
//! bot fronted by a user-facing API gateway, the Lambda functions that
//! implement and provision it, the airline database, the optional Amazon
//! Connect integration, and the IAM roles wired to everything they
//! authorize.

use armature::{Category, Diagram, OutputFormat};

/// Title drawn on the rendered canvas.
pub const TITLE: &str = "Amazon Lex Airline Solution Architecture";

/// Base name of the rendered file, written to the current working directory.
pub const FILENAME: &str = "airline_architecture";

/// Declares the airline solution diagram.
///
/// The returned diagram is fully declared but not yet rendered, and viewer
/// auto-open is left off; [`crate::run`] decides both.
pub fn diagram() -> Diagram {
    let mut diagram = Diagram::new(TITLE)
        .with_filename(FILENAME)
        .with_format(OutputFormat::Png);

    let user = diagram.node("User Interface", Category::ApiGateway);

    let bot = {
        let mut lex = diagram.cluster("Amazon Lex");
        lex.node("Airline Bot", Category::MlService)
    };

    let (business_logic, lex_import, db_import, connect_import) = {
        let mut functions = diagram.cluster("Lambda Functions");
        (
            functions.node("Business Logic", Category::Compute),
            functions.node("Lex Import", Category::Compute),
            functions.node("DynamoDB Import", Category::Compute),
            functions.node("Connect Import", Category::Compute),
        )
    };

    let db = diagram.node("Airlines DB", Category::Database);
    let connect = diagram.node("Amazon Connect\n(Optional)", Category::EngagementService);
    let iam = diagram.node("IAM Roles", Category::SecurityRole);

    diagram.connect(user, bot);
    diagram.connect(bot, business_logic);
    diagram.connect(business_logic, db);
    diagram.connect(lex_import, bot);
    diagram.connect(db_import, db);
    diagram.connect(connect_import, connect);
    diagram.connect(connect, bot);
    diagram.connect(iam, bot);
    diagram.connect(iam, business_logic);
    diagram.connect(iam, lex_import);
    diagram.connect(iam, db_import);
    diagram.connect(iam, connect_import);

    diagram
}
