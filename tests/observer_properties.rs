// Property tests for the notification registry: ordering, multiplicity and removal.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};

use pattern_catalog::behavioral::observer::{HandlerError, Listener, NotificationRegistry};

struct Tagged {
    tag: usize,
    log: Arc<Mutex<Vec<usize>>>,
}

impl Listener for Tagged {
    fn update(&self, _message: &str) -> Result<(), HandlerError> {
        self.log.lock().unwrap().push(self.tag);
        Ok(())
    }
}

fn pool(size: usize, log: &Arc<Mutex<Vec<usize>>>) -> Vec<Arc<Tagged>> {
    (0..size)
        .map(|tag| {
            Arc::new(Tagged {
                tag,
                log: Arc::clone(log),
            })
        })
        .collect()
}

proptest! {
    // Every registration yields exactly one invocation, in registration order
    #[test]
    fn prop_notify_follows_registration_order(
        picks in prop::collection::vec(0usize..6, 0..40),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners = pool(6, &log);
        let registry = NotificationRegistry::new();

        for &i in &picks {
            registry.register(listeners[i].clone());
        }

        let delivered = registry.notify("m").unwrap();
        prop_assert_eq!(delivered, picks.len());
        prop_assert_eq!(log.lock().unwrap().clone(), picks);
    }

    // Unregistering removes every occurrence and keeps the rest in order
    #[test]
    fn prop_unregister_removes_all_occurrences(
        picks in prop::collection::vec(0usize..6, 0..40),
        removed in 0usize..6,
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners = pool(6, &log);
        let registry = NotificationRegistry::new();

        for &i in &picks {
            registry.register(listeners[i].clone());
        }

        let expected_removed = picks.iter().filter(|&&i| i == removed).count();
        prop_assert_eq!(registry.unregister(&listeners[removed]), expected_removed);
        prop_assert!(!registry.contains(&listeners[removed]));

        registry.notify("m").unwrap();
        let expected: Vec<usize> = picks.into_iter().filter(|&i| i != removed).collect();
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }

    // Unregistering something never registered changes nothing
    #[test]
    fn prop_unregister_unknown_is_noop(
        picks in prop::collection::vec(0usize..4, 0..20),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let listeners = pool(4, &log);
        let stranger = Arc::new(Tagged { tag: 99, log: Arc::clone(&log) });
        let registry = NotificationRegistry::new();

        for &i in &picks {
            registry.register(listeners[i].clone());
        }

        prop_assert_eq!(registry.unregister(&stranger), 0);
        prop_assert_eq!(registry.len(), picks.len());
    }
}
