use super::*;

#[test]
fn autoplay_wraps_around() {
    let mut carousel = CarouselState::new(3);
    carousel.advance();
    carousel.advance();
    assert_eq!(carousel.index, 2);
    carousel.advance();
    assert_eq!(carousel.index, 0);
}

#[test]
fn explicit_navigation_stops_autoplay() {
    let mut carousel = CarouselState::new(4);
    carousel.next();
    assert_eq!(carousel.index, 1);
    assert!(!carousel.autoplay);
    carousel.advance();
    assert_eq!(carousel.index, 1);
}

#[test]
fn prev_wraps_to_last() {
    let mut carousel = CarouselState::new(4);
    carousel.prev();
    assert_eq!(carousel.index, 3);
}

#[test]
fn go_to_ignores_out_of_range() {
    let mut carousel = CarouselState::new(2);
    carousel.go_to(1);
    assert_eq!(carousel.index, 1);
    carousel.go_to(5);
    assert_eq!(carousel.index, 1);
}

#[test]
fn hover_pauses_and_leave_resumes() {
    let mut carousel = CarouselState::new(2);
    carousel.set_hovered(true);
    carousel.advance();
    assert_eq!(carousel.index, 0);
    carousel.set_hovered(false);
    carousel.advance();
    assert_eq!(carousel.index, 1);
}

#[test]
fn empty_carousel_never_moves() {
    let mut carousel = CarouselState::new(0);
    carousel.advance();
    carousel.prev();
    carousel.next();
    assert_eq!(carousel.index, 0);
}

#[test]
fn track_transform_shifts_by_whole_slides() {
    let mut carousel = CarouselState::new(4);
    carousel.go_to(2);
    assert_eq!(carousel.track_transform(), "translateX(-200%)");
}
