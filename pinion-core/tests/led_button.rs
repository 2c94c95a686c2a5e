//! End-to-end check of the registry against the simulated bus: an LED
//! output mirrors a button input, the classic first program for this
//! kind of layer.

use pinion_core::config::{BoardConfig, PinAssignment};
use pinion_core::registry::PinRegistry;
use pinion_hal::{PinAddress, PinDirection};
use pinion_hal_sim::SimGpioBus;

const LED_RED: PinAddress = PinAddress::new(1, 7);
const BUTTON_LED_RED: PinAddress = PinAddress::new(2, 5);

#[test]
fn led_follows_button() {
    let mut gpio = PinRegistry::new(SimGpioBus::new());

    let led = gpio.create(LED_RED).unwrap();
    let button = gpio.create(BUTTON_LED_RED).unwrap();

    gpio.set_direction(led, PinDirection::Output);
    gpio.set_direction(button, PinDirection::Input);

    assert!(gpio.bus().is_output(LED_RED));
    assert!(!gpio.bus().is_output(BUTTON_LED_RED));

    // A few iterations of the application loop: read the button, copy
    // its level to the LED
    for pressed in [false, true, true, false, true] {
        gpio.bus_mut().drive(BUTTON_LED_RED, pressed);

        let level = gpio.get_state(button);
        gpio.set_state(led, level);

        assert_eq!(gpio.bus().level(LED_RED), pressed);
    }
}

#[test]
fn input_pin_never_drives_the_wire() {
    let mut gpio = PinRegistry::new(SimGpioBus::new());

    let button = gpio.create(BUTTON_LED_RED).unwrap();
    gpio.set_direction(button, PinDirection::Input);

    // Writing a pin left as input must not reach the bus
    gpio.set_state(button, true);
    assert!(!gpio.bus().level(BUTTON_LED_RED));

    // The line still reads whatever the outside world drives
    gpio.bus_mut().drive(BUTTON_LED_RED, true);
    assert!(gpio.get_state(button));
}

#[test]
fn output_pin_reads_back_its_driven_level() {
    let mut gpio = PinRegistry::new(SimGpioBus::new());

    let led = gpio.create(LED_RED).unwrap();
    gpio.set_direction(led, PinDirection::Output);

    gpio.set_state(led, true);
    assert!(gpio.get_state(led));

    gpio.set_state(led, false);
    assert!(!gpio.get_state(led));
}

#[test]
fn board_config_drives_the_whole_setup() {
    let mut config = BoardConfig::new();
    config
        .pins
        .push(PinAssignment::output("led_red", LED_RED))
        .unwrap();
    config
        .pins
        .push(PinAssignment::input("button_led_red", BUTTON_LED_RED))
        .unwrap();

    let mut gpio = PinRegistry::new(SimGpioBus::new());

    let led = gpio
        .create_configured(config.find_pin("led_red").unwrap())
        .unwrap();
    let button = gpio
        .create_configured(config.find_pin("button_led_red").unwrap())
        .unwrap();

    assert!(gpio.bus().is_output(LED_RED));
    assert_eq!(gpio.direction(button), PinDirection::Input);
    assert_eq!(gpio.len(), 2);

    gpio.bus_mut().drive(BUTTON_LED_RED, true);
    let level = gpio.get_state(button);
    gpio.set_state(led, level);
    assert!(gpio.bus().level(LED_RED));
}
