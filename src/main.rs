use singly_linked::collections::linked::LinkedList;

fn main() {
    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new();
    for animal in ["dog", "cat", "parrot", "hamster", "snake", "turtle"] {
        list.append(animal);
    }
    println!("{list}");
    println!("size: {}", list.len());

    list.insert_at("dragon", 3);
    println!("{list}");

    match list.remove_at(3) {
        Ok(removed) => println!("removed: {removed}"),
        Err(error) => println!("{error}"),
    }
    println!("{list}");

    // Out of range.
    if let Err(error) = list.remove_at(10) {
        println!("{error}");
    }
}
