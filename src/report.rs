use engine::{LeaderEntry, LeagueLeaders, LeagueTable};

pub fn print_standings(table: &LeagueTable) {
    println!();
    println!("{:<3} {:<22} {:>4} {:>4} {:>4} {:>6} {:>6}", "#", "Team", "W", "L", "T", "PCT", "GB");

    for (idx, row) in table.iter().enumerate() {
        let games_behind = if row.games_behind == 0.0 {
            String::from("-")
        } else {
            format!("{:.1}", row.games_behind)
        };

        println!(
            "{:<3} {:<22} {:>4} {:>4} {:>4} {:>6.3} {:>6}",
            idx + 1,
            row.team_name,
            row.wins,
            row.losses,
            row.ties,
            row.win_percentage,
            games_behind
        );
    }
}

pub fn print_leaders(leaders: &LeagueLeaders) {
    print_category("Batting average", &leaders.batting_average, |v| format!("{:.3}", v));
    print_category("Home runs", &leaders.home_runs, |v| format!("{:.0}", v));
    print_category("RBI", &leaders.rbi, |v| format!("{:.0}", v));
    print_category("ERA", &leaders.era, |v| format!("{:.2}", v));
    print_category("Wins", &leaders.wins, |v| format!("{:.0}", v));
    print_category("Strikeouts", &leaders.strikeouts, |v| format!("{:.0}", v));
}

fn print_category<F: Fn(f32) -> String>(title: &str, entries: &[LeaderEntry], format: F) {
    println!();
    println!("{}", title);

    if entries.is_empty() {
        println!("  (no qualified players)");
        return;
    }

    for (idx, entry) in entries.iter().enumerate() {
        println!("  {}. {:<24} {:>6}", idx + 1, entry.name, format(entry.value));
    }
}
