use std::rc::Rc;

use wild_arena::{
    demo_alpha_roster, demo_bravo_roster, ArenaRng, BattleArena, Roster, Trainer,
};

fn main() {
    let team_alpha = Rc::new(demo_alpha_roster());
    let team_bravo = Rc::new(demo_bravo_roster());

    introduce_roster(&team_alpha);
    introduce_roster(&team_bravo);

    // Persistent buffs before the first battle: they survive every reset.
    let trainer = Trainer::new();
    println!("\n--- Applying Trainer Buffs ---");
    if let Some(new_ap) = trainer.apply_attack_buff(team_alpha.member_named("Finny").as_ref(), 25) {
        println!("Finny base attack buffed by 25. New base AP: {}", new_ap);
    }
    if let Some(new_ap) = trainer.apply_attack_buff(team_alpha.member_named("Leo").as_ref(), 10) {
        println!("Leo base attack buffed by 10. New base AP: {}", new_ap);
    }
    if let Some(new_hp) = trainer.apply_health_buff(team_bravo.member_named("Dumbo").as_ref(), 50) {
        println!("Dumbo base health buffed by 50. New base HP: {}", new_hp);
    }
    println!("----------------------------");

    let mut arena = BattleArena::new(Some(team_alpha.clone()), Some(team_bravo.clone()));
    let mut rng = ArenaRng::new_random();

    for _ in 0..3 {
        println!("\n=========================================");
        println!("      PREPARING FOR A NEW BATTLE!      ");
        println!("=========================================");
        match arena.start_battle(&mut rng) {
            Ok(report) => {
                report.events.print_formatted();
                display_roster_status(&team_alpha);
                display_roster_status(&team_bravo);
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    println!();
    arena.history().print();

    // Structured snapshot of the final state, for anything downstream that
    // prefers JSON over narration.
    let snapshot = serde_json::json!({
        "alpha": team_alpha.status(),
        "bravo": team_bravo.status(),
        "history": arena.history(),
    });
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("\nFinal state:\n{}", json),
        Err(e) => println!("Error serializing final state: {}", e),
    }
}

/// Introduce a roster with each member's locomotion flavor.
fn introduce_roster(roster: &Roster) {
    println!("\nTeam {} takes the field:", roster.label());
    for member in roster.members() {
        let creature = member.borrow();
        for capability in creature.capabilities() {
            println!("  {}", capability.flavor_line(creature.name()));
        }
    }
}

/// Print the classic per-roster status block.
fn display_roster_status(roster: &Roster) {
    let status = roster.status();
    println!("--- Team {} Status ---", status.label);
    if status.members.is_empty() {
        println!("No creatures in this team.");
        return;
    }
    for member in &status.members {
        println!(
            "{} ({}) - Health: {}, Attack: {}{}",
            member.name,
            member.kind,
            member.current_health,
            member.current_attack,
            if member.defeated { " (Defeated)" } else { "" }
        );
    }
    println!("Total Team Health: {}", status.total_living_health);
    println!("-------------------------");
}
