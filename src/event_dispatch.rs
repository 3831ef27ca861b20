use crate::state::events::Event;

/// A Message to be handled by the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// The entity that sent this message.
    /// If None, then the scene itself (e.g., its input handling) sent the message.
    pub sender_entity_id: Option<u32>,
    /// The event payload describing whatever happened
    pub event: Event,
}

impl Message {
    fn new(sender: Option<u32>, event: Event) -> Self {
        Message {
            sender_entity_id: sender,
            event,
        }
    }
}

pub trait MessageHandler {
    fn handle_message(&mut self, message: &Message);
}

/// Queues messages during a simulation tick so they can be handled strictly in order once
/// contact detection has finished.
#[derive(Default, Debug)]
pub struct Dispatcher {
    pub messages: Vec<Message>,
}

impl Dispatcher {
    pub fn entity_to_global(&mut self, sender: u32, event: Event) {
        self.messages.push(Message::new(Some(sender), event));
    }

    pub fn global(&mut self, event: Event) {
        self.messages.push(Message::new(None, event));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    // Dispatch is static since the handler (GameState) owns the dispatcher and needs to
    // mutate itself while handling.
    pub fn dispatch(messages: &[Message], handler: &mut dyn MessageHandler) {
        for m in messages {
            handler.handle_message(m);
        }
    }

    /// Returns the current message buffer, and clears it.
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}

#[cfg(test)]
mod dispatcher_tests {
    use super::*;
    use crate::entities::util::Facing;

    #[derive(Default)]
    struct Recorder {
        received: Vec<Message>,
    }

    impl MessageHandler for Recorder {
        fn handle_message(&mut self, message: &Message) {
            self.received.push(message.clone());
        }
    }

    #[test]
    fn messages_are_dispatched_in_order_and_drained() {
        let mut dispatcher = Dispatcher::default();
        dispatcher.entity_to_global(1, Event::StarTouched { star_id: 7 });
        dispatcher.global(Event::CastSpell {
            facing: Facing::Left,
        });
        assert!(!dispatcher.is_empty());

        let messages = dispatcher.drain();
        assert!(dispatcher.is_empty());

        let mut recorder = Recorder::default();
        Dispatcher::dispatch(&messages, &mut recorder);
        assert_eq!(recorder.received.len(), 2);
        assert_eq!(recorder.received[0].sender_entity_id, Some(1));
        assert_eq!(
            recorder.received[0].event,
            Event::StarTouched { star_id: 7 }
        );
        assert_eq!(recorder.received[1].sender_entity_id, None);
    }
}
