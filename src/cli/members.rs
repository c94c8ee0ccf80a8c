//! Team membership command handlers.

use tabled::{Table, Tabled};

use crate::application::Orchestrator;
use crate::error::Result;

use super::{output, AddMemberArgs, MembersArgs};

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// List a project's resolved members as a table.
pub async fn execute(orchestrator: &Orchestrator, args: MembersArgs) -> Result<()> {
    let roster = orchestrator.list_team_members(&args.project_id).await?;

    if roster.is_empty() {
        output::warn("Project has no resolvable members");
    } else {
        let rows: Vec<MemberRow> = roster
            .members
            .iter()
            .map(|member| MemberRow {
                id: member.id.to_string(),
                username: member.username.clone(),
                name: member.display_name.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if roster.is_partial() {
        output::warn(&format!(
            "{} member(s) dropped: identity could not be resolved",
            roster.unresolved
        ));
    }

    Ok(())
}

/// Bind an existing user to a project.
pub async fn execute_add(orchestrator: &Orchestrator, args: AddMemberArgs) -> Result<()> {
    let binding = orchestrator
        .add_team_member(&args.user_id, &args.project_id)
        .await?;

    output::ok("Member bound to project");
    output::key_value("Binding", &binding.name);
    output::key_value("Role", &binding.role_template_id);

    Ok(())
}
