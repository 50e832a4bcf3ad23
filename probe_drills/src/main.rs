use itertools::Itertools;
use probe_drills::{can_form_palindrome, group_anagrams};
use probe_table::ProbingHashTable;

const ROLES: [(&str, &str); 11] = [
    ("Hobbit", "Bilbo"),
    ("Hobbit", "Frodo"),
    ("Wizard", "Gandalf"),
    ("Human", "Aragorn"),
    ("Elf", "Legolas"),
    ("Maiar", "The Necromancer"),
    ("Maiar", "Sauron"),
    ("RingBearer", "Gollum"),
    ("LadyOfLight", "Galadriel"),
    ("HalfElven", "Arwen"),
    ("Ent", "Treebeard"),
];

const WORDS: [&str; 7] = ["east", "cars", "acre", "arcs", "teas", "eats", "race"];

fn main() -> anyhow::Result<()> {
    let mut roles = ProbingHashTable::new();
    for (role, name) in ROLES {
        roles.set(role, name);
    }
    println!("Hobbit: {}", roles.get("Hobbit")?);
    println!("Maiar: {}", roles.get("Maiar")?);
    println!("{:?}", roles);

    for word in ["acecarr", "north"] {
        println!(
            "{:?} can form a palindrome: {}",
            word,
            can_form_palindrome(word)
        );
    }

    println!(
        "anagram groups: {}",
        group_anagrams(&WORDS)
            .iter()
            .map(|group| format!("[{}]", group.join(", ")))
            .join(" ")
    );
    Ok(())
}
