use super::Uninit;
use core::cell::Cell;

struct DropCounter<'a>(&'a Cell<usize>);

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn construct_then_destroy_runs_drop_once() {
    let drops = Cell::new(0);
    let mut cell = Uninit::new();
    unsafe {
        cell.construct(DropCounter(&drops));
        assert_eq!(drops.get(), 0);
        cell.destroy();
    }
    assert_eq!(drops.get(), 1);
    drop(cell);
    assert_eq!(drops.get(), 1);
}

#[test]
fn dropping_the_cell_never_drops_contents() {
    let drops = Cell::new(0);
    let cell = Uninit::init(DropCounter(&drops));
    drop(cell);
    assert_eq!(drops.get(), 0);
}

#[test]
fn reconstruct_after_destroy() {
    let mut cell = Uninit::<Vec<u32>>::new();
    unsafe {
        cell.construct(vec![1, 2]);
        cell.value_mut().push(3);
        assert_eq!(cell.value(), &[1, 2, 3]);
        cell.destroy();

        cell.construct_with(|| vec![9]);
        assert_eq!(cell.value(), &[9]);
        assert_eq!(cell.take(), vec![9]);
    }
}

#[test]
fn pointer_is_stable_across_states() {
    let mut cell = Uninit::<u64>::new();
    let before = cell.as_ptr();
    let slot = unsafe { cell.construct(7) } as *mut u64;
    assert_eq!(before, slot.cast_const());
    assert_eq!(cell.as_mut_ptr(), slot);
    assert_eq!(unsafe { *cell.value() }, 7);
}

#[test]
fn layout_matches_payload() {
    assert_eq!(core::mem::size_of::<Uninit<[u16; 3]>>(), 6);
    assert_eq!(core::mem::align_of::<Uninit<u64>>(), core::mem::align_of::<u64>());
}
