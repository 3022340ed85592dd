use dev_portfolio::channel::{EventChannel, StateChannel};
use dev_portfolio::SectionId;

#[cfg(test)]
mod channel_tests {
    use super::*;

    #[test]
    fn test_state_channel_replays_current_value() {
        let mut channel = StateChannel::new(SectionId::Hero);
        channel.publish(SectionId::About);

        let late = channel.subscribe();
        assert_eq!(late.drain(), vec![SectionId::About]);
    }

    #[test]
    fn test_state_channel_delivers_in_publish_order() {
        let mut channel = StateChannel::new(0u32);
        let sub = channel.subscribe();
        for value in 1..=3 {
            channel.publish(value);
        }

        assert_eq!(sub.drain(), vec![0, 1, 2, 3]);
        assert_eq!(*channel.value(), 3);
    }

    #[test]
    fn test_publish_distinct_skips_repeats() {
        let mut channel = StateChannel::new(SectionId::Hero);
        let sub = channel.subscribe();

        assert!(!channel.publish_distinct(SectionId::Hero));
        assert!(channel.publish_distinct(SectionId::Projects));
        assert!(!channel.publish_distinct(SectionId::Projects));

        assert_eq!(sub.drain(), vec![SectionId::Hero, SectionId::Projects]);
    }

    #[test]
    fn test_latest_keeps_newest_only() {
        let mut channel = StateChannel::new(1);
        let sub = channel.subscribe();
        channel.publish(2);
        channel.publish(3);

        assert_eq!(sub.latest(), Some(3));
        assert_eq!(sub.pending(), 0);
        assert_eq!(sub.latest(), None);
    }

    #[test]
    fn test_event_channel_has_no_replay() {
        let events = EventChannel::new();
        events.emit("early");

        let sub = events.subscribe();
        assert_eq!(sub.try_recv(), None);

        events.emit("late");
        assert_eq!(sub.try_recv(), Some("late"));
    }

    #[test]
    fn test_every_subscriber_gets_a_copy() {
        let events = EventChannel::new();
        let first = events.subscribe();
        let second = events.subscribe();

        events.emit(7);
        assert_eq!(first.drain(), vec![7]);
        assert_eq!(second.drain(), vec![7]);
        assert_eq!(events.subscriber_count(), 2);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut channel = StateChannel::new(0);
        let sub = channel.subscribe();
        assert!(sub.is_active());

        sub.unsubscribe();
        sub.unsubscribe();
        channel.publish(1);

        assert!(!sub.is_active());
        assert_eq!(sub.try_recv(), None);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_subscription_is_forgotten() {
        let events = EventChannel::new();
        let kept = events.subscribe();
        {
            let _dropped = events.subscribe();
            assert_eq!(events.subscriber_count(), 2);
        }

        events.emit(1);
        assert_eq!(events.subscriber_count(), 1);
        assert_eq!(kept.drain(), vec![1]);
    }

    #[test]
    fn test_close_detaches_everyone() {
        let mut channel = StateChannel::new(0);
        let sub = channel.subscribe();
        sub.drain();

        channel.close();
        channel.publish(1);

        assert_eq!(sub.try_recv(), None);
        assert!(!sub.is_active());

        // new subscribers still work
        let fresh = channel.subscribe();
        assert_eq!(fresh.drain(), vec![1]);
    }
}
