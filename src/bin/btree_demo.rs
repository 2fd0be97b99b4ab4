//! Demo driver: build a B-tree from random unique keys, print it, and run
//! the structural self-checks. Consumes only the public tree operations.

use std::error::Error;

use rand::seq::SliceRandom;

use btree::{BTree, Key};

fn generate_and_show_tree(order: usize, key_count: usize) -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    let mut pool: Vec<Key> = (1..1000).collect();
    pool.shuffle(&mut rng);
    let mut keys: Vec<Key> = pool.into_iter().take(key_count).collect();

    let mut tree = BTree::new(order)?;

    println!(
        "Generating a B-tree of order {} with {} random keys...",
        order, key_count
    );
    keys.sort_unstable();
    println!("Keys to insert: {:?}", keys);
    println!("{}", "-".repeat(30));

    for &key in &keys {
        tree.insert(key)?;
    }

    println!("\nB-tree structure:");
    tree.print_tree()?;
    println!("{}", "-".repeat(30));

    if tree.verify_properties() {
        println!("Property check: the B-tree satisfies its structural invariants.");
    } else {
        println!("Property check: the B-tree VIOLATES its structural invariants.");
    }

    if tree.all_leaves_same_depth() {
        println!("Leaf depth check: all leaves sit at the same depth.");
    } else {
        println!("Leaf depth check: leaves sit at DIFFERENT depths.");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    generate_and_show_tree(3, 20)?;
    println!("\n{}\n", "=".repeat(50));
    generate_and_show_tree(2, 15)?;
    Ok(())
}
