/// Integration tests for game logic
///
/// These drive the public API tick by tick the way the main loop does:
/// apply input, update, inspect.
use alien_invasion::entities::grid_shape;
use alien_invasion::game::{fire_bullet, resolve_collisions, update_bullets};
use alien_invasion::input::{Key, Steering};
use alien_invasion::{Alien, Bullet, Game, InputAction, InputEvent, InputManager, Rect, Settings};

fn bullet_at(x: i32, y: i32) -> Bullet {
    Bullet {
        y: y as f32,
        rect: Rect::new(x, y, 3, 15),
    }
}

#[test]
fn test_ship_never_leaves_screen_while_held_right() {
    let mut game = Game::new(Settings::default());
    game.ship.set_intent(false, true);

    for _ in 0..1000 {
        game.update();
        assert!(game.ship.x >= 0.0);
        assert!(game.ship.x <= 1140.0);
    }
    assert_eq!(game.ship.x, 1140.0);
    assert_eq!(game.ship.rect.right(), 1200);
}

#[test]
fn test_fire_at_limit_is_noop() {
    let mut game = Game::new(Settings::default());
    for _ in 0..game.settings.bullets_allowed {
        assert!(game.fire());
    }
    let before = game.bullets.len();
    assert!(!game.fire());
    assert_eq!(game.bullets.len(), before);
}

#[test]
fn test_bullet_removed_after_exact_tick_count() {
    let settings = Settings {
        bullet_speed: 2.5,
        ..Settings::default()
    };
    let start_y = 100;
    let mut bullets = vec![bullet_at(0, start_y)];

    // ceil((100 + 15) / 2.5) = 46
    let expected =
        ((start_y + settings.bullet_height) as f32 / settings.bullet_speed).ceil() as usize;
    assert_eq!(expected, 46);

    for tick in 1..=expected {
        update_bullets(&mut bullets, &settings);
        if tick < expected {
            assert_eq!(bullets.len(), 1, "bullet vanished early at tick {tick}");
        }
    }
    assert!(bullets.is_empty());
}

#[test]
fn test_bullet_removal_with_uneven_speed() {
    let settings = Settings {
        bullet_speed: 4.0,
        ..Settings::default()
    };
    let mut bullets = vec![bullet_at(0, 30)];

    // ceil(45 / 4) = 12
    for _ in 0..11 {
        update_bullets(&mut bullets, &settings);
    }
    assert_eq!(bullets.len(), 1);
    update_bullets(&mut bullets, &settings);
    assert!(bullets.is_empty());
}

#[test]
fn test_fleet_grid_matches_closed_form() {
    let settings = Settings::default();
    let (columns, rows) = grid_shape(&settings);
    let expected_columns = (1200 - 2 * 40) / (2 * 40);
    let expected_rows = (800 - 3 * 40 - settings.ship_height) / (2 * 40);

    assert_eq!((columns as i32, rows as i32), (expected_columns, expected_rows));
    assert_eq!(Game::new(settings).fleet.len(), columns * rows);
}

#[test]
fn test_single_collision_affects_only_the_pair() {
    let mut game = Game::new(Settings::default());
    let target = game.fleet.aliens[20].rect;
    let untouched_aliens: Vec<Rect> = game
        .fleet
        .aliens
        .iter()
        .map(|a| a.rect)
        .filter(|r| *r != target)
        .collect();

    let mut bullets = vec![bullet_at(target.x + 5, target.y + 5), bullet_at(10, 700)];
    let destroyed = resolve_collisions(&mut bullets, &mut game.fleet.aliens);

    assert_eq!(destroyed, 1);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].rect.x, 10);
    let remaining: Vec<Rect> = game.fleet.aliens.iter().map(|a| a.rect).collect();
    assert_eq!(remaining, untouched_aliens);
}

#[test]
fn test_fleet_clear_respawns_same_shape_on_same_tick() {
    let mut game = Game::new(Settings::default());
    let initial: Vec<Rect> = game.fleet.aliens.iter().map(|a| a.rect).collect();

    // Kill everything but one alien that is about to be hit
    game.fleet.aliens.truncate(1);
    let last = game.fleet.aliens[0].rect;
    game.bullets.push(bullet_at(last.x + 20, last.y + 20));

    let report = game.update();
    assert!(report.fleet_respawned);
    assert!(game.bullets.is_empty());
    let respawned: Vec<Rect> = game.fleet.aliens.iter().map(|a| a.rect).collect();
    assert_eq!(respawned, initial);
}

#[test]
fn test_shooting_down_an_alien_through_the_loop() {
    let mut game = Game::new(Settings::default());
    let mut input = InputManager::new();

    input.handle_event(InputEvent::KeyDown(Key::Space));
    assert_eq!(input.actions(), &[InputAction::Fire]);
    assert!(fire_bullet(&mut game.bullets, &game.ship, &game.settings));

    let mut destroyed = 0;
    for _ in 0..400 {
        destroyed += game.update().aliens_destroyed;
        if destroyed > 0 {
            break;
        }
    }
    assert_eq!(destroyed, 1);
    assert_eq!(game.fleet.len(), 97);
    assert!(game.bullets.is_empty());
}

#[test]
fn test_keyboard_and_dpad_share_ship_intent() {
    let mut game = Game::new(Settings::default());
    let mut input = InputManager::new();

    input.handle_event(InputEvent::DeviceAdded(0));
    input.handle_event(InputEvent::HatMotion { x: -1, y: 0 });
    input.handle_event(InputEvent::KeyDown(Key::Left));
    input.handle_event(InputEvent::KeyUp(Key::Left));

    let Steering { left, right } = input.steering();
    game.ship.set_intent(left, right);
    game.update();
    assert_eq!(game.ship.x, 568.5);
}

#[test]
fn test_fleet_drops_when_it_reaches_the_edge() {
    let mut game = Game::new(Settings::default());
    let start_y = game.fleet.aliens[0].rect.y;

    for _ in 0..81 {
        game.update();
    }
    assert_eq!(game.fleet.aliens[0].rect.y, start_y + game.settings.fleet_drop_speed);
}

#[test]
fn test_alien_hit_by_two_bullets_dies_once() {
    let mut aliens = vec![Alien::new(100, 100, 40, 40)];
    let mut bullets = vec![bullet_at(110, 110), bullet_at(120, 110)];

    assert_eq!(resolve_collisions(&mut bullets, &mut aliens), 1);
    assert!(aliens.is_empty());
    assert_eq!(bullets.len(), 1);
}
