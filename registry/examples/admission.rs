use fibre_registry::{
  Item, OverflowStrategy, Priority, Registry, RemovalListener, RemovalReason, SequentialIdSource,
};
use tracing_subscriber::EnvFilter;

// Prints every item leaving the registry.
struct PrintListener;

impl RemovalListener for PrintListener {
  fn on_remove(&self, item: &Item, reason: RemovalReason) {
    println!("[Listener] {} left the registry: {}", item, reason);
  }
}

fn show(registry: &Registry) {
  let items: Vec<String> = registry.list().iter().map(Item::to_string).collect();
  println!("  contents: [{}]", items.join(", "));
}

fn main() -> fibre_registry::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .init();

  println!("--- Registry with RemoveOldestLessImportant, capacity 5 ---");
  let registry = Registry::builder()
    .capacity(5)
    .overflow_strategy(OverflowStrategy::RemoveOldestLessImportant)
    .id_source(SequentialIdSource::new("job"))
    .removal_listener(PrintListener)
    .build()?;

  for p in [
    Priority::High,
    Priority::Medium,
    Priority::Low,
    Priority::Low,
    Priority::Medium,
  ] {
    registry.admit(p)?;
  }
  println!("\nFilled to capacity.");
  show(&registry);

  println!("\nAdmitting a High item: the oldest Low is evicted.");
  registry.admit(Priority::High)?;
  show(&registry);

  println!("\nAdmitting a Low item: nothing ranks below it, so it is rejected.");
  match registry.admit(Priority::Low)? {
    Some(item) => println!("  unexpectedly admitted {}", item),
    None => println!("  rejected"),
  }

  println!("\nAdmitting from an untyped priority string.");
  if let Err(err) = registry.try_admit("urgent") {
    println!("  error: {}", err);
  }

  println!("\nRemoving all Medium items.");
  registry.remove_all_with_priority(Priority::Medium);
  show(&registry);

  println!("\nMetrics: {:?}", registry.metrics());
  Ok(())
}
