//! The `about` screen: what tactik is, who it is for, plus a study quote.

use rand::Rng;

const ABOUT: &str = "\
tactik is a study planner for students who want to take control of their
schedule. Give it your weekly timetable and it ranks tomorrow's subjects by
combining three signals: how often a subject shows up over the next two days,
how much of it you covered over the last three, and how hard you personally
rate it. The result is an ordered list of what to prepare first.

Who it is for:
  - students staying ahead of their classes
  - planners who like an ordered list
  - procrastinators who need to be told where to start
  - teachers suggesting how their students should prepare

Subjects you have not touched in recent days float up, which builds natural
review intervals; clear next-day priorities keep the goals specific and
achievable.";

const QUOTES: &[&str] = &[
    "An investment in knowledge always pays the best interest.",
    "By failing to prepare, you are preparing to fail.",
    "Don't let yesterday take up too much of today.",
    "The best way to start the day is to plan for a productive tomorrow.",
    "Learn from yesterday, live for today, and prepare for tomorrow.",
    "A goal without a plan is just a wish.",
    "Planning is bringing the future into the present, so you can take action now.",
    "Mistakes are proof that you are trying. Learn from them and move forward.",
];

pub fn print() {
    println!("{ABOUT}");
    let mut rng = rand::rng();
    let quote = QUOTES[rng.random_range(0..QUOTES.len())];
    println!("\n\"{quote}\"");
}
