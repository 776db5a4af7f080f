// The core enforces no deadline of its own: `choose_move` runs synchronously
// to completion and returns. Wall-clock time budgets are the external
// judge's responsibility — it measures elapsed time between calls and
// disqualifies a side that overruns, rather than the engine being
// interruptible mid-search.
//
// An implementation that wants a deadline should treat it as advisory,
// checked at the top of `negamax`: on expiry, return the best line from the
// most recently *completed* iterative-deepening pass rather than an
// in-progress one. This is exactly why iterative deepening exists in the
// design — every completed depth leaves a usable `pv` behind.
