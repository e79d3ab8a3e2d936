//! VSOP87D series for Mars: heliocentric L, B, R on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const L0: &[Term] = &[
    [6.20347711583, 0.0, 0.0],
    [0.186563681, 5.05037100303, 3340.6124266998],
    [0.01108216792, 5.40099836958, 6681.2248533996],
    [0.00091798394, 5.75478745111, 10021.8372800994],
    [0.00027744987, 5.97049512942, 3.523118349],
    [0.0001061023, 2.93958524973, 2281.2304965106],
    [0.00012315897, 0.84956081238, 2810.9214616052],
    [0.00008926772, 4.15697845939, 0.0172536522],
    [0.00008715688, 6.11005159792, 13362.4497067992],
    [0.00006797552, 0.36462243626, 398.1490034082],
    [0.00007774867, 3.33968655074, 5621.8429232104],
    [0.00003575079, 1.66186540141, 2544.3144198834],
    [0.00004161101, 0.2281497533, 2942.4634232916],
    [0.0000307525, 0.85696597082, 191.4482661116],
    [0.00002628122, 0.6480614357, 3337.0893083508],
    [0.00002937543, 6.07893711408, 0.0673103028],
    [0.0000238942, 5.03896401349, 796.2980068164],
    [0.00002579842, 0.02996706197, 3344.1355450488],
    [0.0000152814, 1.14979306228, 6151.533888305],
    [0.00001798808, 0.65634026844, 529.6909650946],
    [0.00001264356, 3.62275092231, 5092.1519581158],
    [0.00001286232, 3.06795924626, 2146.1654164752],
    [0.00001546408, 2.91579633392, 1751.539531416],
    [0.00001024907, 3.69334293555, 8962.4553499102],
    [0.00000891567, 0.1829389909, 16703.062133499],
    [0.0000085876, 2.40093704204, 2914.0142358238],
    [0.00000832718, 2.46418591282, 3340.5951730476],
    [0.00000832724, 4.49495753458, 3340.629680352],
    [0.00000712899, 3.66336014788, 1059.3819301892],
    [0.00000748724, 3.82248399468, 155.4203994342],
    [0.00000723863, 0.67497565801, 3738.761430108],
    [0.00000635557, 2.92182704275, 8432.7643848156],
    [0.00000655163, 0.48864075176, 3127.3133312618],
    [0.00000550472, 3.81001205408, 0.9803210682],
    [0.00000552746, 4.47478863016, 1748.016413067],
    [0.00000425972, 0.55365138172, 6283.0758499914],
    [0.00000415132, 0.49662314774, 213.299095438],
    [0.00000472164, 3.6254781941, 1194.4470102246],
    [0.00000306552, 0.38052862973, 6684.7479717486],
    [0.00000312141, 0.99853322843, 6677.7017350506],
    [0.00000293199, 4.22131277914, 20.7753954924],
    [0.00000302377, 4.48618150321, 3532.0606928114],
    [0.00000274028, 0.54222141841, 3340.545116397],
    [0.00000281073, 5.88163372945, 1349.8674096588],
    [0.00000231185, 1.28240685294, 3870.3033917944],
    [0.000002836, 5.76885494123, 3149.1641605882],
    [0.00000236114, 5.75504515576, 3333.498879699],
    [0.00000274035, 0.13372501211, 3340.6797370026],
    [0.00000299396, 2.78323705697, 6254.6266625236],
    [0.00000204161, 2.82133266185, 1221.8485663214],
    [0.00000238857, 5.37155471672, 4136.9104335162],
    [0.00000188639, 1.49103016486, 9492.1463150048],
    [0.00000221225, 3.50466672203, 382.8965322232],
    [0.00000179196, 1.00561112574, 951.7184062506],
    [0.0000017211, 0.43943041719, 5486.777843175],
    [0.00000193126, 3.35715137745, 3.5904286518],
    [0.00000144305, 1.41874193418, 135.0650800354],
    [0.00000160011, 3.94854735192, 4562.4609930212],
    [0.00000174068, 2.41360332576, 553.5694028424],
    [0.00000130993, 4.04491720264, 12303.06777661],
    [0.00000138245, 4.30145176915, 7.1135470008],
    [0.00000128062, 1.80665643332, 5088.6288397668],
    [0.00000139897, 3.32592516164, 2700.7151403858],
    [0.00000128102, 2.20806651008, 1592.5960136328],
    [0.00000116945, 3.12805282207, 7903.073419721],
    [0.00000110375, 1.05195079687, 242.728603974],
    [0.00000113486, 3.70070798123, 1589.0728952838],
    [0.0000010009, 3.24343740861, 11773.3768115154],
    [0.00000095592, 0.53954181149, 20043.6745601988],
    [0.00000098947, 4.8455829474, 6681.2421070518],
    [0.00000104541, 0.78535382076, 8827.3902698748],
    [0.00000084187, 3.9897072073, 4399.994356889],
    [0.00000086931, 2.20186740523, 11243.6858464208],
    [0.00000071437, 2.80307550016, 3185.1920272656],
    [0.00000072091, 5.84672102525, 5884.9268465832],
    [0.00000073476, 2.18428012567, 8429.2412664666],
    [0.00000098946, 2.81481140371, 6681.2075997474],
    [0.00000068414, 2.73834914412, 2288.3440435114],
    [0.00000086751, 1.02092221563, 7079.3738568078],
    [0.0000006532, 2.68118597578, 28.4491874678],
    [0.00000083749, 3.2025613099, 4690.4798363586],
    [0.00000075034, 0.76643418252, 6467.9257579616],
    [0.00000068984, 3.76399731788, 6041.3275670856],
    [0.00000066706, 0.73630620766, 3723.508958923],
    [0.00000063314, 4.5277147047, 426.598190876],
    [0.00000061683, 6.16831509419, 2274.1169495098],
    [0.00000052256, 0.89941531307, 9623.6882766912],
    [0.00000055488, 4.6062546702, 4292.3308329504],
    [0.00000051332, 4.14823636534, 3341.592747768],
    [0.00000056629, 5.06250410206, 15.252471185],
    [0.00000063376, 0.91296240798, 3553.9115221378],
    [0.00000045829, 0.78784235062, 1990.745017041],
    [0.00000048542, 3.95670418719, 4535.0594369244],
    [0.00000041223, 6.02019329922, 3894.1818295422],
    [0.00000041939, 3.58326425115, 8031.0922630584],
    [0.00000056396, 1.68727150304, 6872.6731195112],
    [0.00000055909, 3.46260833495, 263.0839233728],
    [0.00000051678, 2.81307492682, 3339.6321056316],
    [0.00000040671, 3.13832621829, 9595.2390892234],
    [0.00000038107, 0.7340194632, 10025.3603984484],
    [0.00000039495, 5.6322539216, 3097.88382272579],
    [0.00000044174, 3.19529736702, 5628.9564702112],
    [0.00000036716, 2.63720775102, 692.1576012268],
    [0.00000045905, 0.28718981497, 5614.7293762096],
    [0.00000038352, 5.82880707426, 3191.0492295652],
    [0.00000038206, 2.34835984063, 162.4666361322],
    [0.00000032562, 0.48400659333, 6681.2921637024],
    [0.00000037135, 0.68508150774, 2818.035008606],
    [0.00000031168, 3.98160912982, 20.3553193988],
    [0.00000032561, 0.89250316888, 6681.1575430968],
    [0.00000037752, 4.15482955299, 2803.8079146044],
    [0.00000033626, 6.11992401052, 6489.776587288],
    [0.00000029007, 2.42707385674, 3319.8370312074],
    [0.0000003879, 1.35198498795, 10018.3141617504],
    [0.00000033148, 1.14023770004, 5.5229243074],
    [0.00000027584, 1.59691203058, 7210.9158184942],
    [0.00000028686, 5.72055456734, 7477.522860216],
    [0.00000034031, 2.59544082509, 11769.8536931664],
    [0.0000002538, 0.52093116112, 10.6366653498],
    [0.00000026357, 1.34532646574, 3496.032826134],
    [0.00000024554, 4.00323183088, 11371.7046897582],
    [0.00000025637, 0.2496352342, 522.5774180938],
    [0.00000027278, 4.55645328122, 3361.3878221922],
    [0.00000023764, 1.84058377256, 12832.7587417046],
    [0.00000022816, 3.52628212106, 1648.4467571974],
    [0.00000022274, 0.72106133721, 266.6070417218],
    [0.00000021202, 3.11824472284, 2957.7158944766],
    [0.00000020158, 3.67131504946, 1758.6530784168],
    [0.0000002153, 6.15388757177, 3264.3463554242],
    [0.00000020093, 1.08247416065, 7064.1213856228],
    [0.00000021343, 4.28218757863, 4032.7700279266],
    [0.0000002754, 6.08389942337, 6674.1113063988],
    [0.00000019849, 2.37668920745, 10713.9948813262],
    [0.00000025512, 3.43242352804, 3443.7052009184],
    [0.00000022542, 5.64861703438, 2388.8940204492],
    [0.00000024378, 0.96994696413, 632.7837393132],
    [0.00000023079, 4.74990214223, 3347.7259737006],
    [0.00000017709, 3.69742343974, 3344.2028553516],
    [0.00000022662, 3.95446324417, 4989.0591838972],
    [0.00000022604, 5.24082917494, 3205.5473466644],
    [0.00000016811, 5.48619684111, 3.881335358],
    [0.00000018422, 4.22535881468, 2787.0430238574],
    [0.00000022737, 4.98520896596, 7632.9432596502],
    [0.00000016648, 2.52823633184, 14584.2982731206],
    [0.00000020963, 4.27878216453, 5099.2655051166],
    [0.00000016042, 1.76786752521, 3475.6775067352],
    [0.00000015816, 3.13240869691, 59.3738619136],
    [0.00000018113, 3.25756020453, 3337.021998048],
    [0.00000019295, 3.23911854642, 7.046236698],
    [0.00000016772, 4.3973150711, 15643.6802033098],
    [0.00000017555, 4.09197396097, 74.7815985673],
    [0.00000013704, 2.5411701816, 4933.2084403326],
    [0.00000016011, 1.54669633224, 14054.607308026],
    [0.00000013547, 4.04152185347, 4929.6853219836],
    [0.00000014566, 3.45210993051, 7373.3824546264],
    [0.00000013926, 5.40797129468, 10973.55568635],
    [0.00000014246, 0.59808746067, 23.8784377478],
    [0.00000014023, 1.44218648988, 10404.7338123226],
    [0.00000016051, 3.79409950488, 2118.7638603784],
    [0.00000013714, 3.59050634457, 15113.9892382152],
    [0.00000018038, 4.25391532, 2487.4160449478],
    [0.00000015846, 0.56901288692, 103.0927742186],
    [0.00000013403, 5.16920432994, 10213.285546211],
    [0.00000016069, 2.36895958451, 3265.8308281325],
    [0.00000012773, 0.10483085657, 7234.794256242],
    [0.00000012199, 1.73079687044, 36.0278666774],
    [0.00000012283, 5.19940030635, 10021.8545337516],
    [0.00000011945, 5.47997890162, 2921.1277828246],
    [0.0000001189, 4.76593905835, 5828.0284716476],
    [0.00000012283, 3.16862882612, 10021.8200264472],
    [0.00000013274, 6.1780690534, 1744.4259844152],
    [0.00000011777, 5.727315509, 0.42007609361],
    [0.0000001234, 2.52146766331, 2906.900688823],
    [0.00000014458, 4.38010658432, 316.3918696566],
    [0.00000010639, 3.45016942919, 639.897286314],
    [0.00000010925, 0.60397688999, 5085.038411115],
    [0.00000010645, 5.47696728127, 419.4846438752],
    [0.00000010797, 1.37191539718, 10419.9862835076],
    [0.00000010565, 1.09061610786, 12168.0026965746],
    [0.00000009578, 4.89489266197, 3230.4061054804],
    [0.00000009808, 5.83632873998, 14314.1681130498],
    [0.0000000972, 6.28282606427, 9225.539273283],
    [0.00000009146, 1.10220667397, 9808.5381846614],
    [0.00000012733, 1.79883375851, 13745.3462390224],
    [0.00000009779, 3.60056884868, 206.1855484372],
    [0.00000012156, 4.42295240981, 14712.317116458],
    [0.00000008801, 3.97218590685, 170.6728706192],
    [0.00000010685, 4.33894776374, 7740.6067835888],
    [0.00000010041, 1.3829466683, 3583.3410306738],
    [0.00000008499, 4.29275471153, 0.4298831267],
    [0.00000009882, 2.69148019691, 36.6053653042],
    [0.00000010585, 0.89641284928, 23384.2869868986],
    [0.00000008478, 2.86886131803, 9381.9399937854],
    [0.0000000956, 4.33382353581, 131.5419616864],
    [0.00000008433, 3.1523973397, 6525.8044539654],
    [0.00000007517, 1.24476310635, 6894.5239488376],
    [0.00000006753, 1.58869332894, 6836.6452528338],
    [0.00000006666, 4.38910103043, 66.4874089144],
    [0.00000006697, 5.77315870484, 5202.3582793352],
    [0.00000006188, 1.5784796785, 3325.3599555148],
    [0.00000008392, 2.90734956761, 43.718912305],
    [0.00000006427, 6.03333185624, 574.3447983348],
    [0.00000006296, 0.06976040737, 1964.838626854],
    [0.00000006144, 5.43713363624, 1861.7458526354],
    [0.0000000818, 0.43967386003, 2707.8286873866],
    [0.00000006532, 1.24907069366, 12964.300703391],
    [0.00000007341, 4.95693808975, 3767.2106175758],
    [0.00000006134, 3.16322441707, 6680.2445323314],
    [0.00000005937, 4.22752447794, 4459.3682188026],
    [0.00000005848, 4.30379700916, 7875.6718636242],
    [0.00000005895, 0.77226207039, 2699.7348193176],
    [0.00000005962, 3.01318151415, 3369.0616141676],
    [0.00000006307, 1.77830983983, 2178.137722292],
    [0.00000006103, 4.49866000852, 6682.2051744678],
    [0.0000000577, 0.96127853878, 13916.0191096416],
    [0.00000005725, 4.93042706875, 2384.3232707292],
    [0.00000007576, 6.16308742022, 6531.661656265],
    [0.00000007285, 0.52756973131, 10575.4066829418],
    [0.00000005212, 3.48999909365, 12935.8515159232],
    [0.00000005266, 4.51201042373, 6144.4203413042],
    [0.00000006632, 3.48100908925, 1118.7557921028],
    [0.00000005182, 3.25459432228, 2391.43681773],
    [0.00000005214, 0.01023839897, 533.2140834436],
    [0.00000005436, 6.18510045571, 8425.6508378148],
    [0.00000005491, 3.42235890731, 3134.4268782626],
    [0.00000005773, 3.55190490896, 8969.568896911],
    [0.00000005093, 0.60873962999, 8955.3418029094],
    [0.00000004798, 4.63144694279, 4569.574540022],
    [0.00000005773, 5.92316959013, 640.8776073822],
    [0.00000005661, 0.75892958537, 3120.199784261],
    [0.00000004912, 1.70762118141, 13358.9265884502],
    [0.00000005438, 4.29256867866, 3503.079062832],
    [0.00000004631, 3.34058594066, 3116.2676309979],
    [0.00000005823, 2.39009621568, 3302.479391062],
    [0.00000005095, 1.12497131307, 5331.3574437408],
    [0.00000004409, 1.3870873295, 17256.6315363414],
    [0.00000004193, 0.19116539271, 9830.3890139878],
    [0.00000004164, 0.43798301495, 1066.49547719],
    [0.0000000422, 1.69427060019, 13524.9163429314],
    [0.00000005192, 3.63500646439, 536.8045120954],
    [0.00000005664, 0.50446281443, 5305.4510535538],
    [0.00000005264, 5.40031180025, 3355.8648978848],
    [0.00000005403, 5.96867227489, 3074.005384978],
    [0.00000004046, 0.83826342101, 10021.9045904022],
    [0.00000004153, 3.14497570817, 8439.8779318164],
    [0.0000000482, 1.09025983917, 13365.9728251482],
    [0.00000004906, 3.73078406569, 1228.9621133222],
    [0.00000004576, 0.99344843456, 6158.6474353058],
    [0.00000004211, 3.87091723842, 3312.163239232],
    [0.00000004917, 6.25051681717, 17654.7805397496],
    [0.00000003597, 6.07298181151, 10818.1352869158],
    [0.00000003547, 1.87663674277, 17395.2197347258],
    [0.00000003734, 1.37011069213, 3973.396166013],
    [0.00000004422, 2.89974680697, 6247.5131155228],
    [0.00000003975, 4.03441621102, 1052.2683831884],
    [0.00000004466, 4.59188422424, 5518.7501489918],
    [0.00000003445, 4.26610076208, 3178.1457905676],
    [0.00000003607, 4.24527056399, 8329.671610597],
    [0.00000003511, 1.95133364438, 10177.2576795336],
    [0.000000033, 0.68865737747, 149.5631971346],
    [0.00000003235, 3.90171358031, 27.4015560968],
    [0.00000003946, 5.81982010903, 6261.7402095244],
    [0.00000003387, 0.14377701728, 10014.7237330986],
    [0.00000003374, 0.74722238154, 6048.4411140864],
    [0.0000000309, 3.98540766861, 2648.454825473],
    [0.00000003821, 5.23987859516, 5724.935697429],
    [0.00000003026, 0.34314724795, 220.4126424388],
    [0.00000004052, 1.24671617482, 10021.7699697966],
    [0.00000002937, 0.73100893561, 2.751510611],
    [0.00000003084, 3.79925632319, 169.580183133],
    [0.0000000404, 2.91258200196, 22747.2907148744],
    [0.00000003246, 4.90760526525, 6702.000248892],
    [0.00000003223, 0.9264000861, 16865.5287696312],
    [0.00000002879, 1.47180601483, 3346.1353510072],
    [0.00000003723, 0.49978317761, 1.4844727083],
    [0.00000002798, 3.26910698548, 9168.6408983474],
    [0.00000003347, 0.68791690253, 3863.1898447936],
    [0.0000000344, 2.77706064625, 6660.4494579072],
    [0.00000002798, 2.79673379094, 16858.4825329332],
    [0.00000002753, 4.41190782119, 3415.3940252671],
    [0.00000002703, 0.19222683184, 3237.5196524812],
    [0.00000002719, 3.26628341377, 3914.9572250346],
    [0.00000002941, 3.76169133143, 6784.3176276182],
    [0.00000003078, 5.48104322207, 3335.0895023924],
    [0.00000002701, 5.08537226206, 6688.3384004004],
    [0.00000002606, 4.83032556909, 4672.6673142406],
    [0.00000002883, 2.64068086362, 3320.257107301],
    [0.00000003089, 4.396198243, 1332.0548875408],
    [0.00000003438, 1.93467064449, 10551.528245194],
    [0.00000003433, 0.20933510815, 6604.958782124],
    [0.00000002513, 2.88151502604, 17924.9106998204],
    [0.00000002683, 3.68680362407, 3603.6963500726],
    [0.00000002696, 2.6693177673, 10184.3039162316],
    [0.00000002386, 1.05710815775, 3607.2194684216],
    [0.00000002444, 3.46901444423, 6298.3283211764],
    [0.00000002566, 5.55941956468, 6546.1597733642],
    [0.00000002354, 0.8589678994, 3351.2490920496],
    [0.00000002304, 6.0721098579, 1214.7350193206],
    [0.00000002387, 4.30419979225, 3360.96774609859],
    [0.00000003109, 2.18099805904, 16173.3711684044],
    [0.00000002907, 3.43894993113, 2693.601593385],
    [0.0000000255, 4.18354174372, 3546.797975137],
    [0.00000002991, 2.37500894603, 13517.8701062334],
    [0.00000002508, 5.99249607455, 5729.506447149],
    [0.00000002202, 5.58486973955, 664.75604513],
    [0.00000002467, 2.81052575497, 15110.4661198662],
    [0.00000002154, 3.59696831702, 6677.6344247478],
    [0.00000002166, 3.35965682842, 589.0648270082],
    [0.00000002112, 4.57048853017, 6127.6554505572],
    [0.00000002178, 3.21663279493, 20199.094959633],
    [0.0000000226, 3.62776666288, 7799.9806455024],
    [0.00000002703, 5.89441421026, 6438.4962494256],
    [0.00000002201, 4.69972051344, 17277.4069318338],
    [0.00000002131, 2.5180126434, 1545.3539829788],
    [0.00000002093, 4.0368841963, 6684.8152820514],
    [0.00000002249, 5.26171743929, 5618.3198048614],
    [0.00000002117, 4.80404492675, 3657.0042963564],
    [0.00000002265, 3.87401620754, 110.2063212194],
    [0.00000002521, 4.21237950687, 2494.5295919486],
    [0.00000002492, 6.10452779411, 3329.97576135],
    [0.00000002154, 4.59093274516, 5625.3660415594],
    [0.00000001929, 1.21920197307, 21.8508293264],
    [0.00000002343, 0.90613584736, 227.476132789],
    [0.00000001871, 2.0370739008, 56.8983749356],
    [0.00000001894, 4.12432529517, 3399.9862886134],
    [0.00000002271, 3.78951734652, 7910.1869667218],
    [0.00000001876, 3.0203488708, 4885.9664096786],
    [0.00000002145, 4.74972617629, 18984.2926300096],
    [0.00000002035, 2.75110234296, 128.0188433374],
    [0.0000000177, 2.73496011079, 6606.4432548323],
    [0.00000001733, 1.70571779606, 6.6836638741],
    [0.00000001743, 2.22986352012, 17085.9586657222],
    [0.00000001723, 1.98207274526, 735.8765135318],
    [0.00000001814, 0.92405242552, 4555.3474460204],
    [0.00000001661, 3.07319305915, 1692.1656695024],
    [0.00000002332, 5.05223613332, 20618.0193585336],
    [0.00000001653, 3.86316179052, 699.2711482276],
    [0.0000000189, 4.14080522607, 5459.3762870782],
    [0.0000000168, 3.49750704538, 3347.6586633978],
    [0.00000001909, 2.11478314309, 6816.289933435],
    [0.00000001918, 3.31232891649, 3333.5661900018],
    [0.00000001707, 4.88386665097, 3407.0998356142],
    [0.00000001577, 3.5177713158, 13362.432453147],
    [0.00000001827, 1.14937084769, 2807.3983432562],
    [0.00000002094, 1.78938870686, 20597.2439630412],
    [0.00000001577, 5.54854302324, 13362.4669604514],
    [0.00000001677, 4.39073937265, 8270.2977486834],
    [0.00000001561, 0.8024690473, 3017.1070100424],
    [0.00000001552, 2.66876850182, 3024.2205570432],
    [0.00000001708, 2.09721350898, 2814.4445799542],
    [0.00000002109, 1.48733908496, 2679.3794999188],
    [0.00000001547, 2.12956399169, 661.232926781],
    [0.00000001764, 5.90517079295, 3326.3853326982],
    [0.00000001503, 4.3438918317, 13936.794505134],
    [0.00000001504, 0.83367652471, 4775.7600884592],
    [0.00000001543, 5.82417982389, 3344.4937620578],
    [0.00000001458, 1.42630589706, 15508.6151232744],
    [0.00000001648, 2.88801518612, 8273.8208670324],
    [0.00000001527, 1.10261249454, 2675.8563815698],
    [0.000000018, 5.17144672709, 38.1330356378],
    [0.00000001439, 0.48751113425, 76.2660712756],
    [0.00000001478, 4.63008666184, 19800.9459562248],
    [0.0000000177, 2.18315009072, 2301.58581590939],
    [0.00000001712, 2.60291779744, 29.429508536],
    [0.00000001416, 2.46912016889, 2597.6223661672],
    [0.00000001835, 3.93223068469, 6843.6914895318],
    [0.00000001437, 3.48241890037, 3281.2385647862],
    [0.00000001385, 4.18004525683, 2284.7536148596],
    [0.00000001479, 3.88994194685, 6034.2140200848],
    [0.00000001469, 2.91808856545, 12722.5524204852],
    [0.00000001824, 3.94139541752, 18454.601664915],
    [0.00000001368, 1.71899681607, 13760.5987102074],
    [0.00000001406, 2.42916192473, 853.196381752],
    [0.00000001361, 4.69126219798, 11081.2192102886],
    [0.00000001375, 4.90787845983, 3304.5845600224],
    [0.00000001544, 3.23251603238, 156.4007205024],
    [0.00000001543, 1.13497136095, 3336.7310913418],
    [0.00000001385, 2.90281983822, 1581.959348283],
    [0.00000001311, 6.21748423079, 2547.8375382324],
    [0.00000001377, 2.56537541792, 568.8218740274],
    [0.00000001474, 4.65215247212, 394.6258850592],
    [0.00000001619, 0.07481583409, 1435.1476617594],
    [0.00000001369, 0.08979359617, 7895.9598727202],
    [0.00000001272, 5.84659079053, 21.335640467],
    [0.00000001331, 3.80007277718, 13119.72110282519],
    [0.00000001202, 5.90681878458, 187.9251477626],
    [0.00000001284, 5.30205682052, 6571.0185321802],
    [0.00000001468, 5.91503888421, 3339.1279539915],
    [0.00000001497, 2.57629850836, 151.8972810852],
    [0.0000000127, 4.089962414, 4356.275444584],
    [0.00000001159, 0.00546309207, 799.8211251654],
    [0.00000001154, 1.81024985603, 158.9435177832],
    [0.0000000117, 4.15567553953, 14.2270940016],
    [0.00000001349, 0.39391022745, 2540.7913015344],
    [0.00000001403, 4.89956428847, 4039.8835749274],
    [0.00000001188, 3.46422365287, 1015.6630178842],
    [0.00000001136, 5.54132891775, 13553.8979729108],
    [0.00000001282, 4.5228842134, 3929.677253708],
    [0.00000001124, 1.40102701439, 13149.1506113612],
    [0.00000001254, 3.84775964741, 3980.5097130138],
    [0.00000001121, 5.04552583589, 23141.5583829246],
    [0.00000001088, 0.89388884633, 3340.19235060619],
    [0.00000001476, 4.20852908107, 16460.33352952499],
    [0.00000001084, 5.70551481838, 3760.097070575],
    [0.00000001197, 1.24543578245, 26724.8994135984],
    [0.00000001253, 5.82286965998, 3344.5445799629],
    [0.00000001078, 6.24742453183, 17.812522118],
    [0.00000001462, 2.27467510211, 369.6998159404],
    [0.00000001044, 4.34158344243, 2277.7073781616],
    [0.00000001099, 4.08747611117, 802.3639224462],
    [0.00000001122, 4.31726854418, 107.6635239386],
    [0.00000001148, 0.42666214138, 949.1756089698],
    [0.00000001183, 0.3156003412, 1162.4747044078],
    [0.0000000113, 3.46061330657, 5732.0492444298],
    [0.00000001059, 1.34075999078, 2149.6885348242],
    [0.00000001126, 5.22902222299, 194.9713844606],
    [0.00000000977, 3.44426658417, 9779.1086761254],
    [0.00000001134, 0.13507173479, 12566.1516999828],
    [0.00000001185, 3.65682936623, 6456.8800576977],
    [0.00000000962, 4.85370284827, 3510.1926098328],
    [0.00000001033, 2.47380728164, 31.9723058168],
    [0.00000001172, 1.72927931309, 6923.9534573736],
    [0.00000000986, 1.05152205629, 16335.8378045366],
    [0.00000001292, 6.02388659607, 3316.733988952],
    [0.00000000932, 1.56812178735, 111.1866422876],
    [0.0000000113, 2.06879370733, 3376.6402933772],
    [0.00000000924, 0.82106390115, 3364.4908644476],
    [0.00000001005, 5.48594935121, 11236.57229942],
    [0.00000000936, 1.58837554752, 10235.1363755374],
    [0.00000001063, 1.93321644244, 87.30820453981],
    [0.00000000945, 5.10393817688, 8013.2797409404],
    [0.00000000957, 4.4142175236, 433.7117378768],
    [0.00000000921, 1.71021166461, 2067.9314010726],
    [0.0000000091, 1.91562889347, 401.6721217572],
    [0.00000000931, 4.61327789373, 5415.6573747732],
    [0.00000001033, 3.98512631089, 10596.1820784342],
    [0.00000000908, 5.30549216988, 7107.8230442756],
    [0.00000000945, 0.21610469082, 9872.2740829648],
    [0.00000000991, 2.76931703924, 5938.234792867],
    [0.00000000918, 4.37217510741, 1854.6323056346],
    [0.00000000889, 1.81025662091, 2409.249339848],
    [0.00000001058, 3.63303046818, 7255.5696517344],
    [0.0000000086, 2.78826625605, 5621.8601768626],
    [0.0000000086, 0.75749461239, 5621.8256695582],
    [0.0000000085, 3.82228424021, 272.6729573516],
    [0.00000000851, 0.25287875945, 11766.2632645146],
    [0.00000000853, 1.84243320985, 2142.6422981262],
    [0.0000000103, 0.42255009123, 1596.1864422846],
    [0.00000000826, 1.26069501589, 20206.141196331],
    [0.00000000835, 4.64394754967, 127.9515330346],
    [0.00000001046, 3.50232998647, 9866.4168806652],
    [0.00000000824, 2.42928138519, 11.0457002639],
    [0.0000000109, 6.06536924506, 3341.0325027934],
    [0.00000000808, 1.17345081945, 6460.8122109608],
    [0.00000000821, 0.19617131185, 22743.4093795164],
    [0.00000000804, 5.03144428114, 2.5427972808],
    [0.00000001074, 2.80025232939, 3077.528503327],
    [0.00000000794, 4.57067003887, 5223.6939198022],
    [0.00000000822, 0.90150471199, 8646.0634802536],
    [0.00000000884, 1.71007411939, 3.9321532631],
    [0.0000000085, 1.24977903471, 12295.9542296092],
    [0.00000000926, 3.02847055739, 3377.217792004],
    [0.00000000779, 1.97930055918, 5408.5438277724],
    [0.0000000096, 6.16414205869, 8542.970706035],
    [0.00000000785, 4.63077378309, 3341.0423098265],
    [0.00000000752, 3.51125131831, 10020.8569590312],
    [0.00000000749, 2.5028675102, 2295.4575905122],
    [0.00000000801, 4.54004277501, 1039.0266107904],
    [0.00000000735, 3.91703254169, 12310.1813236108],
    [0.00000000784, 3.24368310213, 3384.3313390048],
    [0.00000000719, 3.35536995801, 11780.4903585162],
    [0.0000000094, 3.589745616, 23539.7073863328],
    [0.00000000865, 1.12444569157, 206.7007372966],
    [0.00000000731, 5.61232905415, 16062.1845261168],
    [0.00000000823, 2.65316808033, 3169.9395560806],
    [0.00000000903, 4.86743346013, 931.3630868518],
    [0.00000000705, 1.4630539462, 792.7748884674],
    [0.00000000754, 2.89691411536, 3296.8935143948],
    [0.00000000736, 2.21038016464, 146.8116865236],
    [0.00000000785, 2.32844966721, 3340.1825435731],
    [0.00000000685, 2.34948834397, 1.1806426521],
    [0.00000000677, 4.3380350705, 3877.4169387952],
    [0.00000000729, 3.56726385957, 485.9720527896],
    [0.00000000668, 5.16798891078, 12721.572099417],
    [0.00000000713, 4.80558699772, 4142.976349146],
    [0.00000000842, 1.59708732155, 16304.9131300908],
    [0.00000000698, 1.91829605833, 6665.9723822146],
    [0.00000000698, 4.64681188157, 11216.284290324],
    [0.00000000684, 3.88514563357, 846.0828347512],
    [0.00000000666, 2.23927960017, 20735.83216142559],
    [0.00000000638, 2.05380863176, 16699.53901514999],
    [0.00000000726, 5.04566216294, 3329.5667264359],
    [0.00000000697, 0.30680314664, 19676.4502312364],
    [0.0000000065, 3.23944472757, 9588.1255422226],
    [0.00000000736, 2.24443728739, 11250.7993934216],
    [0.00000000692, 1.76465916332, 51.28033786241],
    [0.00000000645, 0.07661067442, 52.2603149128],
    [0.00000000685, 2.72118140264, 6643.0918177618],
    [0.00000000684, 1.26157751115, 142.1786270362],
    [0.00000000635, 3.85231847116, 6.0659156298],
    [0.00000000819, 6.04967230806, 19402.7969528166],
    [0.00000000664, 3.6022393001, 1903.4368125012],
    [0.00000000613, 4.96450118774, 8859.3625756916],
    [0.00000000615, 5.7446741784, 6696.4773245846],
    [0.00000000622, 1.64154132852, 24150.080051345],
    [0.00000000659, 0.12506816965, 8116.372515159],
    [0.00000000679, 1.94943016061, 12995.2253778368],
    [0.00000000616, 4.94607504516, 9485.032768004],
    [0.00000000793, 2.84922599989, 29.4918183034],
    [0.00000000597, 5.72067567055, 3113.1362939108],
    [0.00000000763, 0.42513533173, 3873.8265101434],
    [0.00000000587, 1.31684217558, 9499.2598620056],
    [0.00000000592, 4.34796024028, 3826.5844794894],
    [0.00000000652, 5.53658742492, 9065.5481241288],
    [0.00000000583, 0.59190068342, 26084.0218062162],
    [0.00000000603, 0.7713556663, 3342.0968994081],
    [0.00000000701, 3.35897774328, 6709.6740408674],
    [0.00000000574, 1.08976979801, 6357.7194367422],
    [0.0000000075, 4.84737198179, 10022.8176011676],
    [0.00000000588, 5.65927128604, 2171.0241752912],
    [0.00000000632, 3.84852695407, 16276.463942623],
    [0.00000000632, 1.43230388645, 16706.585251848],
    [0.0000000078, 1.1518150254, 377.3736079158],
    [0.00000000554, 4.18192049239, 382.879278571],
    [0.00000000568, 0.03816333919, 6414.6178116778],
    [0.00000000569, 2.57704345512, 35.5627344686],
    [0.00000000566, 0.62804830762, 3189.5647568569],
    [0.00000000687, 5.61456944029, 155.3530891314],
    [0.00000000563, 2.57358138188, 19406.6782881746],
    [0.00000000693, 1.15645091892, 966.9708774356],
    [0.00000000576, 1.60357663736, 3192.5337022735],
    [0.00000000621, 2.23214771591, 3274.1250177854],
    [0.00000000586, 6.17266280012, 9602.3526362242],
    [0.00000000541, 0.53968808391, 13171.0014406876],
    [0.0000000057, 3.11852290115, 2221.856634597],
    [0.00000000542, 0.41889651002, 1641.3332101966],
    [0.00000000532, 0.16606105669, 5511.636601991],
    [0.0000000053, 3.78205188174, 7270.2896804078],
    [0.00000000575, 5.48929613719, 2075.0449480734],
    [0.0000000067, 3.67090656417, 6475.0393049624],
    [0.00000000509, 4.21526585284, 7380.4960016272],
    [0.0000000051, 1.59587338243, 13362.3823964964],
    [0.00000000494, 2.1371159806, 2604.735913168],
    [0.00000000534, 1.03109772656, 1478.8665740644],
    [0.00000000506, 5.92145494356, 685.044054226],
    [0.00000000469, 0.83917541691, 3041.4860324306],
    [0.00000000468, 1.97135671591, 2412.772458197],
    [0.00000000468, 4.57635781664, 11670.2840372968],
    [0.00000000559, 1.47641018288, 8671.9698704406],
    [0.00000000475, 2.07517976424, 5835.1420186484],
    [0.00000000466, 2.92801596791, 2277.2983432475],
    [0.00000000478, 6.13550464878, 4825.544916394],
    [0.00000000502, 0.77928275348, 4407.1079038898],
    [0.00000000462, 3.80503324215, 11140.5930722022],
    [0.00000000499, 3.25557381873, 1744.493294718],
    [0.00000000525, 0.74022979976, 1265.5674786264],
    [0.00000000521, 6.27577138682, 3981.490034082],
    [0.00000000482, 0.1482033753, 14158.7477136156],
    [0.0000000046, 2.03348517376, 25685.872802808],
    [0.0000000051, 4.27704405425, 3472.1543883862],
    [0.00000000444, 1.95486223268, 3226.2133197864],
    [0.00000000575, 0.59007504383, 2766.267628365],
    [0.00000000437, 5.63861950911, 8958.9322315612],
    [0.00000000492, 6.10071747922, 2285.1626497737],
    [0.00000000572, 5.10308842466, 8564.306346502],
    [0.0000000043, 4.12851356192, 13.241772398],
    [0.00000000544, 4.78254843814, 9380.9596727172],
    [0.0000000043, 3.83861916944, 1765.7666254176],
    [0.00000000499, 4.26055736809, 6652.7756659318],
    [0.00000000541, 0.84245625839, 4981.9456368964],
    [0.00000000591, 2.01874828234, 27490.6924780448],
    [0.00000000438, 1.36437546581, 12509.2533250472],
    [0.0000000047, 4.70961176845, 3723.4917052708],
    [0.00000000421, 1.76100140625, 956.2891559706],
    [0.00000000413, 0.49206034039, 13355.3361597984],
    [0.00000000412, 0.29353415123, 2810.9387152574],
    [0.00000000412, 3.2486541775, 18451.07854656599],
    [0.00000000412, 1.70721395764, 7314.0085927128],
    [0.00000000412, 4.54594776716, 2810.904207953],
    [0.00000000448, 3.04254429984, 5636.070017212],
    [0.0000000051, 1.18739936388, 13362.517017102],
    [0.00000000408, 1.32068176489, 20809.4676246452],
    [0.00000000427, 1.1610074204, 19004.6479494084],
    [0.0000000042, 3.49180180953, 1655.5603041982],
    [0.00000000433, 0.55429134487, 9945.5712088238],
    [0.00000000424, 4.60854671688, 6518.7582172674],
    [0.00000000415, 5.67120343816, 99.5696558696],
    [0.00000000476, 5.94537443289, 48835.19385644859],
    [0.00000000405, 5.63206200287, 3450.8187479192],
    [0.00000000495, 4.38317490235, 2480.302497947],
    [0.00000000415, 3.61905205961, 2089.782230399],
    [0.00000000395, 0.25208772249, 1375.7737998458],
    [0.00000000421, 2.26337694295, 13892.1406718938],
    [0.00000000391, 5.25566087245, 10042.6126755918],
    [0.00000000504, 4.91016850189, 8965.9784682592],
    [0.00000000417, 3.45088934666, 279.7865043524],
    [0.00000000389, 0.98703891513, 7203.8022714934],
    [0.00000000431, 2.11881719623, 56.8032621698],
    [0.00000000497, 1.63121523594, 22345.2603761082],
    [0.00000000377, 4.06263841184, 10124.930054318],
    [0.00000000377, 3.16019395941, 224.3447957019],
    [0.00000000378, 5.82532048605, 6675.7019290922],
    [0.00000000377, 0.05833226835, 905.4566966648],
    [0.00000000445, 0.33560120738, 515.463871093],
    [0.00000000426, 2.66458973231, 4076.4889402316],
    [0.00000000489, 0.75760372851, 3561.0250691386],
    [0.00000000389, 0.5028382658, 2825.1485556068],
    [0.00000000396, 5.14198726837, 5195.2447323344],
    [0.00000000414, 3.12530321804, 10001.061884607],
    [0.00000000502, 5.02356488339, 73.297125859],
    [0.00000000432, 3.3153835914, 5617.9107699473],
    [0.00000000359, 4.97622870666, 5820.9149246468],
    [0.00000000359, 5.420722273, 6019.9919266186],
    [0.00000000449, 3.79544854612, 4996.172730898],
    [0.00000000374, 2.85563965649, 2111.6503133776],
    [0.00000000426, 0.24129917209, 5625.7750764735],
    [0.00000000423, 3.60507971235, 8226.5788363784],
    [0.00000000402, 4.5181371951, 4392.8808098882],
    [0.00000000391, 4.26714089799, 21795.21409161479],
    [0.00000000447, 4.25776540974, 18052.9295431578],
    [0.00000000355, 4.17584780659, 6740.5987153132],
    [0.00000000353, 1.81574804066, 6686.747777707],
    [0.00000000462, 3.22304237134, 2011.1003364398],
    [0.00000000341, 3.22071023668, 4253.1826703654],
    [0.00000000475, 4.28822688035, 367.2243289624],
    [0.00000000462, 2.91312544527, 418.9243989006],
    [0.00000000416, 4.83203726375, 8535.8571590342],
    [0.00000000431, 3.22440150226, 21265.5231265202],
    [0.00000000333, 3.99300815003, 1353.3905280078],
    [0.0000000034, 0.71636465254, 15664.03552270859],
    [0.00000000416, 2.58443168474, 5753.3848848968],
    [0.00000000356, 2.35639379021, 4.57074972],
    [0.0000000033, 4.04831945983, 3.1030422554],
    [0.00000000381, 4.06283076724, 1062.9050485382],
    [0.00000000431, 5.42246026973, 26482.1708096244],
    [0.00000000328, 4.0627695455, 6944.3087767724],
    [0.00000000334, 5.10221163477, 22324.9050567094],
    [0.000000004, 2.28211698182, 3209.0704650134],
    [0.0000000042, 2.44159662565, 6155.057006654],
    [0.00000000375, 1.09229714548, 4246.0691233646],
    [0.00000000449, 4.38183542571, 5106.3790521174],
    [0.0000000033, 2.55172725319, 19513.9835951042],
    [0.00000000319, 4.05704496382, 5430.3946570988],
    [0.0000000031, 4.99907184482, 5095.6750764648],
    [0.00000000344, 0.6269183218, 9389.0535407862],
    [0.00000000319, 3.31673970253, 596.178374009],
    [0.00000000305, 4.6694291091, 6756.0064519669],
    [0.00000000409, 6.07568936266, 50.8324593058],
    [0.00000000377, 5.42211267415, 1190.9238918756],
    [0.00000000342, 2.67821304845, 6148.010769956],
    [0.00000000298, 5.91093444215, 9886.772200064],
    [0.00000000299, 5.44077050156, 10028.9508271002],
    [0.00000000315, 1.03304445564, 3490.1756238344],
    [0.00000000369, 3.93279262125, 1879.5583747534],
    [0.00000000304, 4.56372485787, 7483.5887758458],
    [0.0000000033, 3.29725079066, 286.9623611206],
    [0.0000000029, 3.4385002402, 6418.1409300268],
    [0.00000000289, 2.827660453, 3171.0322435668],
    [0.00000000317, 4.13345374602, 1883.0814931024],
    [0.00000000294, 0.0190673259, 202.2533951741],
    [0.0000000031, 4.37565854379, 2796.6943676036],
    [0.00000000364, 0.54935210242, 290.4854794696],
    [0.00000000291, 2.39413982848, 29026.48522950779],
    [0.00000000286, 5.76562894312, 5642.1982426092],
    [0.00000000392, 3.01171327788, 10721.108428327],
    [0.00000000318, 4.93376925851, 1197.9701285736],
    [0.00000000315, 2.844378401, 10610.9021071076],
    [0.00000000299, 1.18299169304, 550.0462844934],
    [0.00000000336, 4.3076981876, 5989.0672521728],
    [0.00000000315, 1.4140786334, 6947.8318951214],
    [0.00000000294, 6.16453752963, 8982.810669309],
    [0.00000000285, 2.82644088669, 9654.612951137],
    [0.00000000281, 0.27739627997, 8166.1573430938],
    [0.00000000279, 4.08648927643, 5355.2358814886],
    [0.0000000033, 3.11968019451, 41.5507909848],
    [0.00000000275, 5.89019272334, 3337.8609160888],
    [0.00000000275, 4.00268079937, 3620.3989310522],
    [0.00000000292, 3.06830662617, 4.3620363898],
    [0.00000000317, 0.01919037405, 2267.003402509],
    [0.00000000272, 1.70373580224, 3742.284548457],
    [0.00000000294, 0.16019381973, 6670.5881880498],
    [0.00000000264, 2.07967576148, 3735.238311759],
    [0.00000000262, 4.49437120405, 6887.4104018368],
    [0.00000000307, 3.03375977801, 6660.8695340008],
    [0.0000000028, 0.47728086796, 5401.4302807716],
    [0.00000000268, 0.46331887242, 6578.132079181],
    [0.00000000312, 3.62016422039, 255.970376372],
    [0.00000000278, 5.62032972822, 3378.7454623376],
    [0.00000000268, 2.97528422526, 21947.1113727],
    [0.00000000303, 2.71946492092, 3313.210870603],
    [0.00000000263, 3.85883671333, 28628.3362260996],
    [0.00000000257, 0.25607724431, 19146.7592661418],
    [0.00000000282, 2.29169514758, 2008.557539159],
    [0.00000000301, 0.83275594655, 2806.9893083421],
    [0.00000000264, 3.78635346388, 3936.7908007088],
    [0.00000000254, 1.28062508539, 95.9792272178],
    [0.0000000025, 5.5849385856, 412.3710968744],
    [0.00000000284, 4.71065509252, 5621.9102335132],
    [0.00000000286, 5.1185436619, 5621.7756129076],
    [0.00000000254, 5.77068701321, 5813.291189322],
    [0.00000000311, 2.67573060947, 912.5702436656],
    [0.00000000252, 4.19548440341, 24.858758816],
    [0.00000000255, 1.80023727978, 3193.8007401762],
    [0.00000000247, 2.94199704738, 310.8407988684],
    [0.00000000261, 5.68285399692, 3133.9116894032],
    [0.00000000255, 4.46589323429, 5490.300961524],
    [0.00000000247, 2.28207487665, 246.251722323],
    [0.00000000257, 5.64335704456, 10706.8813343254],
    [0.00000000246, 0.26910281348, 22.7684966094],
    [0.00000000241, 0.03931394254, 9070.1188738488],
    [0.00000000283, 1.30585259585, 4025.6564809258],
    [0.00000000272, 1.28327911416, 1442.2612087602],
    [0.00000000294, 4.02082336381, 2814.8536148683],
    [0.00000000249, 4.92144829429, 31022.7531708562],
    [0.00000000237, 3.07683243726, 9947.0556815321],
    [0.00000000236, 6.0576638036, 948.1952879016],
    [0.00000000309, 3.45153658664, 25287.7237993998],
    [0.00000000232, 4.99538565545, 1505.28780909299],
    [0.00000000275, 1.20294105507, 6691.8615187494],
    [0.00000000305, 2.73902403412, 176.6937301338],
    [0.00000000231, 5.13610567818, 6997.6167230562],
    [0.00000000237, 0.90339496046, 8.093868069],
    [0.00000000229, 0.6325004797, 23017.0626579362],
    [0.00000000249, 6.05357589804, 2060.8178540718],
    [0.0000000027, 2.14769161882, 2973.3880977374],
    [0.00000000241, 4.63019900075, 1612.9513330316],
    [0.00000000227, 5.94537053649, 2942.4806769438],
    [0.00000000269, 5.93687481153, 4005.3684718298],
    [0.00000000227, 3.91459879933, 2942.4461696394],
    [0.00000000238, 5.14570745178, 721.1392312062],
    [0.00000000275, 1.06902528739, 3343.3639373108],
    [0.00000000232, 3.5211029051, 6674.1786167016],
    [0.00000000277, 0.19619249083, 270.1974703736],
    [0.00000000274, 0.30235979008, 5607.6158292088],
    [0.00000000233, 5.75237138576, 604.8497407048],
    [0.00000000214, 3.38626276995, 647.0108333148],
    [0.00000000282, 0.29694635625, 12323.4230960088],
    [0.00000000282, 3.18114716742, 6364.832983743],
    [0.00000000264, 4.64751563064, 1346.3442913098],
    [0.0000000028, 4.64995184564, 6701.5801727984],
    [0.00000000246, 3.03036675631, 3304.0070613956],
    [0.00000000213, 4.80555095681, 8830.9133882238],
    [0.0000000022, 1.54642908481, 23546.7536230308],
    [0.00000000214, 1.35475764936, 184.8499079702],
    [0.00000000228, 4.29420876593, 2970.9126107594],
    [0.00000000229, 2.53361265404, 3710.3122426402],
    [0.00000000273, 1.89943168433, 270.1301600708],
    [0.00000000284, 3.28345980607, 16063.164847185],
    [0.00000000211, 5.84341192825, 1971.9521738548],
    [0.00000000214, 0.22905754741, 5.1991911658],
    [0.00000000246, 4.55971876123, 6040.3472460174],
    [0.00000000229, 1.24432891752, 3568.0885594888],
    [0.00000000216, 3.2009868012, 362.1211367308],
    [0.00000000201, 2.45025935972, 20426.571092422],
    [0.00000000223, 2.07804482295, 17101.2111369072],
    [0.00000000271, 3.49210901141, 3436.5916539176],
    [0.00000000226, 0.42945734871, 557.0925211914],
    [0.00000000264, 5.0579494007, 2938.9403049426],
    [0.00000000207, 6.03491870748, 22487.3716928416],
    [0.00000000197, 5.62923956977, 5209.471826336],
    [0.00000000211, 2.26445749553, 765.7930644464],
    [0.00000000202, 0.88670673933, 767.8488193486],
    [0.00000000212, 1.85965510753, 4782.87363546],
    [0.00000000194, 4.77420671032, 6850.8050365326],
    [0.00000000192, 0.51565572072, 323.5054166574],
    [0.00000000209, 4.79794980231, 14047.4937610252],
    [0.00000000193, 2.56057288512, 18606.4989460002],
    [0.00000000209, 1.46088434217, 5.8572022996],
    [0.00000000214, 0.97578687412, 17468.8551979454],
    [0.00000000196, 4.08789826861, 3262.8618827159],
    [0.00000000198, 3.9911121623, 10018.2468514476],
    [0.00000000235, 1.11133081576, 625.6701923124],
    [0.00000000197, 0.48692287381, 15106.8756912144],
    [0.00000000214, 5.33581901309, 955.2415245996],
    [0.00000000199, 0.40088144456, 7586.6815500644],
    [0.00000000251, 5.57906426342, 138.5881983844],
    [0.00000000208, 4.11480858445, 1755.062649765],
    [0.0000000021, 2.30499661227, 53.3079462838],
    [0.00000000253, 1.27099771143, 309.2783226558],
    [0.00000000242, 3.71426781511, 3212.5935833624],
    [0.00000000178, 3.06961783443, 1437.1756141986],
    [0.00000000203, 0.28410501881, 582.9989113784],
    [0.0000000019, 0.10457198807, 26087.9031415742],
    [0.00000000178, 0.53068485806, 7366.2689076256],
    [0.00000000245, 4.20195166994, 8436.2875031646],
    [0.00000000176, 3.66697456425, 6688.2710900976],
    [0.00000000177, 4.48104044431, 8799.988713778],
    [0.00000000181, 3.57461078885, 15121.102785216],
    [0.00000000198, 3.55065962909, 24606.13555322],
    [0.00000000187, 3.45440079747, 1329.51209026],
    [0.00000000176, 5.81532365473, 12406.1605508286],
    [0.00000000235, 1.28568802052, 4427.3959129858],
    [0.00000000179, 1.55718466444, 3362.4632560262],
    [0.00000000174, 1.61086801253, 30065.5118402982],
    [0.00000000199, 0.07164714815, 375.7657315702],
    [0.00000000174, 4.58412775793, 3283.7140517642],
    [0.00000000171, 5.82189798695, 23937.856389741],
    [0.00000000182, 2.57146189845, 418.504322807],
    [0.00000000168, 5.13131619552, 21393.5419698576],
    [0.00000000183, 4.9316196205, 9468.267877257],
    [0.00000000167, 1.48091400654, 2619.4731954936],
    [0.00000000169, 5.12437031125, 3223.2925584796],
    [0.00000000188, 3.41823914376, 5032.7780962022],
    [0.00000000181, 0.50010974122, 2125.8774073792],
    [0.00000000164, 1.71077130702, 15849.865751747],
    [0.00000000202, 6.21085922593, 3909.4343007272],
    [0.00000000171, 5.86158194602, 625.6251361972],
    [0.00000000165, 3.8556911822, 13207.029307365],
    [0.00000000163, 2.0437336743, 3347.2960905739],
    [0.0000000016, 2.83784244321, 5888.4499649322],
    [0.00000000212, 2.32801112252, 3232.9489027612],
    [0.00000000163, 4.23488695195, 31968.9486527994],
    [0.00000000159, 1.48046671186, 249.9044607422],
    [0.0000000016, 0.21960307161, 12942.965062924],
    [0.0000000022, 3.90787704883, 9638.9407478762],
    [0.00000000161, 2.94093367568, 3370.0419352358],
    [0.00000000159, 5.59017475732, 1442.2784624124],
    [0.00000000221, 3.82548751198, 1954.7171503636],
    [0.00000000192, 4.62595272276, 3336.6802734367],
    [0.00000000164, 1.59200641542, 386.4196505722],
    [0.00000000169, 5.45784867095, 259.5608050238],
    [0.00000000201, 0.95077053594, 29424.634232916],
    [0.00000000174, 1.15216485688, 6382.0984591304],
    [0.00000000163, 1.16606667991, 4289.7880356696],
    [0.00000000187, 3.2213595646, 2751.5475996916],
    [0.00000000162, 4.79372588575, 24889.5747959916],
    [0.00000000192, 0.88040946364, 5244.049239201],
    [0.0000000016, 2.8503478437, 9374.8264467846],
    [0.00000000172, 2.38601254063, 2281.2477501628],
    [0.00000000202, 4.12164786769, 7321.1221397136],
    [0.00000000156, 4.55171204694, 27682.1407441564],
    [0.0000000017, 4.62851491273, 10824.2012025456],
    [0.00000000157, 0.91363725609, 4503.0871311076],
    [0.00000000156, 5.58255618318, 10448.4354709754],
    [0.00000000157, 0.92229160815, 15636.566656309],
    [0.00000000171, 5.43820628341, 11904.9187732018],
    [0.0000000018, 1.89091405241, 13575.7488022372],
    [0.00000000198, 4.42539692212, 10025.4277087512],
    [0.00000000158, 4.12087914642, 11240.1627280718],
    [0.00000000211, 2.42218772392, 8749.1562544722],
    [0.00000000183, 1.47934835951, 6677.3435180416],
    [0.00000000197, 1.43469282909, 14061.7208550268],
    [0.0000000017, 4.32424842659, 742.9900605326],
    [0.0000000017, 2.92905324873, 9093.9973115966],
    [0.0000000016, 2.79797608932, 1461.0540519464],
    [0.00000000174, 5.37738922471, 3318.7615973734],
    [0.00000000172, 0.35524089578, 2281.2132428584],
    [0.00000000147, 2.76602235522, 4193.8088084518],
    [0.00000000151, 4.23962231148, 3368.0139827966],
    [0.00000000157, 1.01295201512, 24336.0053931492],
    [0.00000000165, 0.58335652806, 15906.7641266826],
    [0.00000000149, 5.69553079999, 31570.7996493912],
    [0.00000000154, 5.2850438151, 1481.4093713452],
    [0.00000000163, 1.8128862851, 18849.2275499742],
    [0.00000000145, 3.57053080979, 3497.0131472022],
    [0.00000000156, 3.56978076425, 21791.69097326579],
    [0.00000000143, 0.56704903096, 13212.8865096646],
    [0.00000000155, 0.08429188155, 6657.3464156518],
    [0.00000000184, 2.54999403339, 24076.4445881254],
    [0.00000000146, 1.16594990123, 526.1678467456],
    [0.00000000144, 4.19229335185, 2771.7905526724],
    [0.00000000169, 3.10771037057, 239.205485625],
    [0.00000000144, 6.26688878164, 6679.7403806913],
    [0.00000000174, 2.3750902528, 3397.5108016354],
    [0.00000000163, 3.88047919138, 16703.0448798468],
    [0.00000000161, 1.73958633312, 2185.2512692928],
    [0.00000000164, 0.6214699473, 1538.240435978],
    [0.00000000182, 6.16856014864, 6685.1061887576],
    [0.0000000014, 4.08200595943, 4186.695261451],
    [0.00000000192, 4.47709998867, 57.8786960038],
    [0.00000000151, 3.06451266512, 838.9692877504],
    [0.00000000139, 1.12767399649, 6682.7093261079],
    [0.00000000187, 4.97174626997, 6681.6547365263],
    [0.0000000015, 5.69209290362, 9360.6043533184],
    [0.0000000016, 5.66336382679, 10927.2939767642],
    [0.00000000137, 3.46860408347, 5562.4690612968],
    [0.00000000192, 5.27908098216, 34363.365597556],
    [0.00000000137, 5.87023088486, 2945.9865416406],
    [0.0000000018, 1.07686767816, 15806.146839442],
    [0.00000000135, 0.34109799474, 7322.1024607818],
    [0.00000000169, 2.2740858315, 379.3734138742],
    [0.00000000172, 3.83276777655, 6621.850991486],
    [0.00000000134, 0.8948661109, 13286.1836355236],
    [0.00000000168, 3.24434245132, 11614.4332937322],
    [0.00000000135, 6.03727673544, 1214.8023296234],
    [0.0000000015, 0.81912738038, 3416.8784979754],
    [0.00000000136, 5.06627117467, 14421.8316369884],
    [0.00000000138, 5.19336961955, 13363.4300278674],
    [0.00000000163, 5.91124428824, 16703.07938715119],
    [0.00000000181, 3.31978654659, 139.6981395228],
    [0.00000000162, 4.05905033891, 1795.258443721],
    [0.00000000132, 0.409015061, 1083.260367937],
    [0.00000000156, 0.1230414464, 1107.1388056848],
    [0.00000000158, 6.25022915072, 6666.997759398],
    [0.00000000131, 3.95250083817, 3.4558080462],
    [0.00000000147, 4.94673462086, 15010.8964639966],
    [0.0000000014, 6.13853404667, 12729.665967486],
    [0.00000000131, 5.43398849473, 25665.5174834092],
    [0.00000000135, 5.06017183369, 11876.469585734],
    [0.00000000128, 2.8696933273, 6549.6828917132],
    [0.00000000174, 5.18169887171, 28230.18722269139],
    [0.00000000179, 3.25589354429, 4922.5717749828],
    [0.00000000139, 5.33624615245, 23958.6317852334],
    [0.00000000127, 5.78406495652, 14577.1847261198],
    [0.00000000128, 1.27276688747, 8584.6616659008],
    [0.00000000133, 0.39052474466, 12410.7313005486],
    [0.00000000134, 1.09641189843, 8962.438096258],
    [0.00000000125, 3.20445201519, 29.8820436102],
    [0.00000000136, 3.62250122667, 3511.285297319],
    [0.00000000162, 5.36465149996, 2472.6787626222],
    [0.0000000015, 0.40179894287, 1111.642245102],
    [0.00000000129, 1.94909076932, 19645.5255567906],
    [0.00000000172, 5.21328160366, 6747.712262314],
    [0.00000000126, 4.39378462616, 21548.9623692918],
    [0.00000000146, 3.85987749053, 13361.469385731],
    [0.00000000156, 5.24740844581, 6645.1969867222],
    [0.00000000137, 4.94588047257, 20995.3929664494],
    [0.00000000131, 1.72431469184, 11925.2740926006],
    [0.00000000136, 2.04268940441, 10654.6210194126],
    [0.0000000014, 1.54439148652, 8219.4652893776],
    [0.00000000127, 6.16695075115, 10016.314355792],
    [0.00000000155, 5.47145482987, 2.9689454166],
    [0.00000000132, 6.25626202928, 13227.3846267638],
    [0.00000000121, 3.74135485334, 10294.510237451],
    [0.00000000134, 3.12718351732, 8962.4726035624],
    [0.00000000122, 0.77282907794, 4936.7988689844],
    [0.00000000125, 4.23213631052, 15650.7937503106],
    [0.00000000157, 1.79175545524, 16489.763038061],
    [0.00000000155, 4.15655698197, 56.3831860762],
    [0.00000000134, 1.53268827347, 708.98980227659],
    [0.00000000136, 4.01025697673, 9797.4924843975],
    [0.00000000156, 4.6155626882, 3354.8395207014],
    [0.00000000131, 4.47476808853, 11776.8999298644],
    [0.00000000118, 1.17466010141, 4606.1799053262],
    [0.00000000128, 0.12648796247, 6681.6449294932],
    [0.00000000122, 0.1351137794, 8322.5580635962],
    [0.00000000119, 1.2913911635, 10544.4146981932],
    [0.00000000128, 4.4496605074, 13465.5424810178],
    [0.00000000119, 4.0170962999, 14481.205498902],
    [0.00000000147, 1.8159027965, 685.1113645288],
    [0.00000000137, 4.78402836071, 3613.2853840514],
    [0.00000000151, 1.48428558337, 9698.331863442],
    [0.00000000136, 2.47757608387, 10156.9023601348],
    [0.00000000123, 2.42353206298, 6.1332259326],
    [0.00000000117, 5.40635440024, 688.6344828778],
    [0.00000000153, 5.00372030984, 14556.8967170238],
    [0.00000000133, 3.15773785434, 1125.8693391036],
    [0.00000000153, 1.94292660454, 6533.1461289733],
    [0.00000000124, 4.94608245253, 12825.6451947038],
    [0.00000000117, 1.13528750738, 4452.2546718018],
    [0.00000000115, 3.34121813462, 10001.48196070061],
    [0.00000000115, 3.44586362144, 7696.8878712838],
    [0.00000000117, 0.72489390402, 27.4688663996],
    [0.00000000132, 2.41318250916, 6717.252720077],
    [0.00000000118, 0.35995031424, 27832.0382192832],
    [0.00000000157, 1.73929012934, 11560.0777160774],
    [0.00000000148, 2.14023976341, 15265.8865193004],
    [0.00000000113, 1.29183863745, 26880.3198130326],
    [0.00000000151, 0.95890610457, 6530.1771835567],
    [0.00000000153, 5.62679784282, 9911.63095888],
    [0.00000000157, 0.09791378159, 138.5174968707],
    [0.00000000119, 2.16883964744, 7082.8969751568],
    [0.00000000113, 5.43102427558, 422.027441156],
    [0.0000000013, 2.13493506322, 117.812802892],
    [0.0000000014, 2.5119459163, 28.9816299794],
    [0.00000000128, 1.238227512, 6680.804777306],
    [0.00000000111, 4.60294776614, 25135.8265183146],
    [0.00000000118, 0.34226497704, 4140.4335518652],
    [0.00000000112, 4.02233737541, 6314.0005244372],
    [0.00000000134, 3.3592621473, 11247.2089647698],
    [0.0000000012, 6.09430372868, 4106.4054911462],
    [0.00000000117, 0.03006245187, 7.6737919754],
    [0.00000000109, 3.62630036582, 3344.11829139661],
    [0.00000000109, 1.94277745743, 16702.9948231962],
    [0.00000000114, 4.87315937546, 6151.5166346528],
    [0.00000000109, 5.65707270595, 3344.152798701],
    [0.00000000108, 0.72637519191, 10.569355047],
    [0.00000000128, 5.77326416186, 13369.5632538],
    [0.00000000147, 4.73848506543, 11610.9101753832],
    [0.00000000145, 4.95495312886, 9859.3706439672],
    [0.00000000111, 3.28808788953, 257.018007743],
    [0.00000000112, 4.79777726412, 12140.6011404778],
    [0.00000000109, 3.73199687068, 13635.1226641508],
    [0.00000000117, 1.20057736014, 6705.1032911474],
    [0.00000000149, 4.91688353237, 277.0349937414],
    [0.00000000108, 3.37299798972, 6717.8302187038],
    [0.00000000106, 0.53379407701, 5085.1057214178],
    [0.00000000125, 4.62770076269, 9329.6796788726],
    [0.00000000107, 4.60288570375, 1957.7250798532],
    [0.00000000113, 4.04786119569, 6953.8978107512],
    [0.00000000106, 0.75378922686, 149.8974751268],
    [0.00000000114, 0.62074562387, 6151.5511419572],
    [0.00000000108, 5.22204692781, 1556.5681469554],
    [0.00000000104, 1.02502614223, 4878.8528626778],
    [0.00000000133, 1.15811543786, 816.6533262152],
    [0.00000000134, 1.69834857217, 183.869586902],
    [0.00000000104, 2.58832774275, 14591.4118201214],
    [0.00000000107, 4.42117075795, 7.130800653],
    [0.00000000126, 0.03750399181, 16.83220104979],
    [0.00000000102, 1.20624870972, 11986.6759069534],
    [0.00000000102, 2.97579561878, 29822.7832363242],
    [0.00000000116, 4.73049067619, 13366.040135451],
    [0.0000000013, 4.10484632841, 35.6077905838],
    [0.00000000113, 3.69200525056, 44.6538332402],
    [0.00000000111, 5.12900291511, 146.7944328714],
    [0.00000000126, 1.82187459534, 26887.3660497306],
    [0.00000000121, 6.08309355316, 7100.7094972748],
    [0.00000000105, 6.16606590276, 9175.7544453482],
    [0.00000000132, 2.97955203077, 1250.8301963008],
    [0.00000000106, 5.08419485009, 8742.0427074714],
    [0.0000000012, 0.59116561391, 31172.650645983],
    [0.00000000112, 3.70888430091, 10050.2864675672],
    [0.000000001, 1.82077956276, 12012.5822971404],
    [0.00000000107, 4.86100312387, 7899.550301372],
    [0.00000000099, 0.72997085174, 18977.1790830088],
    [0.00000000107, 5.25025570307, 63.7358983034],
    [0.00000000099, 2.79139996703, 17932.0242468212],
    [0.00000000097, 4.94370173613, 28109.214616052],
    [0.00000000122, 4.18676567644, 19617.07636932279],
    [0.00000000121, 3.14207351411, 9278.8472195668],
    [0.00000000112, 1.43537110436, 16232.745030318],
    [0.00000000096, 2.57929371627, 12715.4388734844],
    [0.00000000096, 2.51396484677, 3535.5838111604],
    [0.00000000112, 6.19137312195, 6685.1570066627],
    [0.00000000109, 1.53428110338, 16703.1294438018],
    [0.00000000096, 4.29245810274, 7906.59653807],
    [0.00000000096, 3.08847844641, 3468.6312700372],
    [0.00000000095, 6.091860847, 10037.0897512844],
    [0.00000000094, 1.79812841802, 20047.1976785478],
    [0.0000000011, 4.24859410294, 3337.0720546986],
    [0.00000000093, 2.17945548408, 16066.0658614748],
    [0.00000000115, 5.44548079869, 11353.8921676402],
    [0.00000000098, 1.89605054783, 33406.124266998],
    [0.00000000101, 3.00793005829, 3528.5375744624],
    [0.00000000096, 5.4065991242, 5749.8617665478],
    [0.00000000113, 3.93443805059, 7167.1969061892],
    [0.00000000092, 3.58985964414, 6724.9437657046],
    [0.00000000119, 3.9056157026, 11346.7786206394],
    [0.00000000097, 2.5728079023, 1747.6073781529],
    [0.00000000118, 3.82111723459, 9072.6616711296],
    [0.00000000096, 0.72646224606, 3152.68727893721],
    [0.00000000092, 6.23928508055, 24491.4257925834],
    [0.00000000099, 1.86991802881, 72.0557333548],
    [0.00000000094, 1.51091806861, 9801.4246376606],
    [0.00000000091, 4.94377681711, 8756.269801473],
    [0.00000000095, 2.58771497236, 11663.170490296],
    [0.00000000093, 0.6609244332, 30.9919847486],
    [0.00000000088, 2.47386826588, 17232.7530985936],
    [0.000000001, 0.19616913512, 11883.5831327348],
    [0.00000000094, 0.61277732908, 73.6354632196],
    [0.00000000091, 6.04139177526, 153.9252335244],
    [0.00000000095, 0.30865798871, 29168.5965462412],
    [0.0000000011, 6.27936643935, 3337.106562003],
    [0.00000000087, 2.09287965409, 10264.5658840734],
    [0.00000000089, 3.27633365389, 3002.3697277168],
    [0.00000000091, 1.89622049447, 37895.4262903674],
    [0.00000000118, 3.88268323672, 1236.075660323],
    [0.00000000094, 2.2781906199, 4845.9002357928],
    [0.00000000085, 3.07438636612, 9983.7042444616],
    [0.00000000086, 3.94463425808, 16.764890747],
    [0.00000000099, 4.58890225582, 3774.3241645766],
    [0.00000000086, 1.27758598252, 34513.2630726828],
    [0.00000000118, 6.10625309129, 454.9093665273],
    [0.00000000096, 6.08772700197, 1755.4716846791],
    [0.00000000085, 4.73193631802, 4576.6880870228],
    [0.00000000116, 0.88573303872, 16511.6138673874],
    [0.00000000083, 3.13948373813, 10191.4174632324],
    [0.00000000083, 0.36972674664, 9755.2302383776],
    [0.00000000112, 2.26524635842, 10006.5848089144],
    [0.00000000087, 4.25461508452, 8.1681365824],
    [0.00000000087, 5.31716927554, 1868.8593996362],
    [0.00000000115, 3.3050783005, 14157.7000822446],
    [0.00000000087, 2.90507350729, 36.995590611],
    [0.00000000083, 3.58400049244, 12928.7379689224],
    [0.00000000086, 2.46839611271, 113.7294395684],
    [0.00000000096, 2.99829695985, 6510.5519827804],
    [0.00000000084, 1.34333260788, 4133.3873151672],
    [0.00000000093, 2.41895388985, 20040.15144184979],
    [0.00000000085, 5.92093268818, 12299.544658261],
    [0.00000000082, 4.71321236549, 7733.493236588],
    [0.00000000081, 5.26971110105, 12199.9750023914],
    [0.0000000008, 4.34410099751, 7218.029365495],
    [0.00000000095, 0.02613500045, 2.9010142898],
    [0.00000000094, 6.22018441621, 20043.69181385099],
    [0.00000000085, 4.66573809999, 8638.9499332528],
    [0.00000000079, 2.89839604813, 22854.596021804],
    [0.00000000104, 0.94882888784, 2735.762685995],
    [0.0000000008, 1.68097745917, 12839.8722887054],
    [0.00000000085, 1.95515305721, 4686.95671800959],
    [0.00000000094, 0.58147434179, 14128.2427712456],
    [0.00000000091, 1.16317999954, 3495.9655158312],
    [0.00000000084, 4.04104644774, 9815.6517316622],
    [0.00000000082, 1.83662951627, 19190.4781784468],
    [0.0000000008, 4.04733274699, 3188.7151456146],
    [0.00000000084, 2.71620952175, 12089.768681172],
    [0.0000000008, 2.7736315821, 9495.6694333538],
    [0.00000000078, 5.77285430206, 10397.6030116696],
    [0.00000000084, 0.78188080031, 7214.4389368432],
    [0.00000000094, 2.14762315943, 13532.0298899322],
    [0.00000000101, 5.76349087526, 1484.9324896942],
    [0.00000000082, 3.11421789241, 8446.9914788172],
    [0.00000000096, 5.85152670536, 3492.509707785],
    [0.00000000079, 4.69625309523, 5298.337506553],
    [0.00000000097, 3.97960395898, 18208.349942592],
    [0.00000000105, 1.74376904536, 36.6485629295],
    [0.00000000094, 4.18941238607, 20043.6573065466],
    [0.00000000075, 3.46629875063, 13341.6743113068],
    [0.00000000092, 2.67278833288, 6680.7949702729],
    [0.00000000075, 4.59723160021, 9993.3880926316],
    [0.00000000087, 0.91979096638, 8425.7181481176],
    [0.00000000074, 0.42228487063, 48429.2821823244],
    [0.00000000074, 0.48470953224, 11456.9849418588],
    [0.00000000077, 0.10707484151, 1371.411763456],
    [0.00000000093, 1.38010528069, 3145.6410422392],
    [0.00000000075, 5.2806125707, 12306.590894959],
    [0.00000000079, 3.7866638604, 7.5786792096],
    [0.00000000073, 4.42902162523, 14.7372823256],
    [0.00000000084, 3.41538432898, 6637.5059410946],
    [0.00000000093, 3.41302342683, 1596.1191319818],
    [0.00000000071, 3.13537213242, 9488.6231966558],
    [0.00000000079, 2.33442828498, 12465.5344127422],
    [0.00000000078, 2.21525134547, 2810.988771908],
    [0.00000000099, 0.48801369293, 17499.3601403154],
    [0.00000000075, 4.10299895268, 5525.8636959926],
    [0.00000000071, 4.04186021414, 259.493494721],
    [0.00000000073, 2.20102876718, 30774.5016425748],
    [0.00000000074, 4.93439968296, 13517.8027959306],
    [0.00000000071, 5.32625652676, 6670.1791531357],
    [0.00000000078, 2.17664185326, 13421.8235687128],
    [0.00000000088, 5.38469204503, 17762.4440636882],
    [0.00000000081, 2.48353174238, 73.6009559152],
    [0.00000000092, 1.1308844819, 7747.7203305896],
    [0.0000000007, 1.16361323015, 5220.1708014532],
    [0.00000000084, 5.8322038791, 22.3782713026],
    [0.00000000076, 5.21065604639, 4271.9755135516],
    [0.0000000008, 4.01817623627, 3311.18291816379],
    [0.00000000068, 2.4593769794, 6279.5527316424],
    [0.00000000067, 4.31723563048, 2281.2978068134],
    [0.00000000067, 4.88776321797, 4379.6390374902],
    [0.00000000069, 3.57006764536, 14955.045720432],
    [0.00000000078, 2.62374773232, 2810.8541513024],
    [0.00000000067, 4.76301301456, 6812.766815086],
    [0.0000000007, 5.60319851277, 13383.2251022916],
    [0.0000000007, 3.05647570196, 10081.211142013],
    [0.00000000081, 4.91537623765, 3333.9287628257],
    [0.00000000082, 5.4920498711, 5483.254724826],
    [0.00000000065, 3.50466797067, 9161.5273513466],
    [0.00000000065, 2.79212460026, 13497.5147868346],
    [0.0000000007, 0.93640431668, 6106.8800550648],
    [0.00000000073, 2.57583496978, 6614.7374444852],
    [0.0000000007, 0.8417007058, 16695.94858649819],
    [0.00000000069, 1.10040627005, 2544.3316735356],
    [0.00000000063, 6.05841309176, 6453.7487206106],
    [0.00000000069, 2.67053540192, 2641.3412784722],
    [0.00000000086, 1.73112264739, 6286.5989683404],
    [0.00000000062, 5.49002783256, 4957.0868780804],
    [0.00000000072, 3.38857910283, 3184.2117061974],
    [0.00000000069, 5.35281990892, 2544.2971662312],
    [0.00000000064, 4.79175268505, 3181.6689089166],
    [0.0000000006, 6.18449904353, 3361.9480671668],
    [0.00000000065, 1.48236627574, 4819.4790007642],
    [0.00000000054, 3.66018290396, 2917.5373541728],
    [0.00000000064, 4.72286914683, 2281.1631862078],
    [0.00000000053, 4.65521663671, 3448.2759506384],
    [0.0000000006, 0.77450276964, 3319.2767862328],
    [0.00000000051, 1.45142985881, 3547.3131639964],
    [0.00000000051, 4.81258158513, 4403.517475238],
    [0.0000000005, 0.37366902835, 3322.7999045818],
    [0.0000000005, 4.68787711774, 3253.30422216],
    [0.00000000067, 4.63578431535, 4694.0029547076],
    [0.00000000049, 3.17471347671, 5452.2627400774],
    [0.00000000051, 2.54791773443, 4001.8453534808],
    [0.00000000048, 2.81171553464, 3372.5847325166],
    [0.00000000054, 4.45945188023, 10284.9212034722],
    [0.00000000053, 3.8513121352, 9758.7533567266],
    [0.00000000051, 1.11244863072, 6901.6374958384],
    [0.00000000062, 1.4219800963, 6830.7880505342],
    [0.00000000055, 5.6167298818, 45494.58142974879],
    [0.00000000054, 0.61701959453, 4716.3862265456],
    [0.00000000054, 4.28556326526, 2910.4911174748],
    [0.00000000045, 3.14626081312, 13951.5145338074],
    [0.0000000005, 4.16235480519, 12979.553174576],
    [0.00000000046, 1.66182208107, 7768.0083396856],
    [0.00000000045, 5.07701425888, 14951.522602083],
    [0.00000000043, 4.3172345953, 5881.4037282342],
    [0.00000000045, 2.39713581676, 8852.2490286908],
    [0.00000000043, 2.10202660495, 3337.1566186536],
    [0.00000000048, 0.19934255781, 1905.4647649404],
    [0.00000000056, 5.25687695855, 12808.8803039568],
    [0.00000000049, 2.06320966659, 4296.9015826704],
    [0.00000000042, 6.07282126953, 4295.8539512994],
    [0.00000000043, 1.7457161378, 3130.8364496108],
    [0.0000000005, 2.27112469544, 3427.9206312396],
    [0.0000000005, 0.30214747765, 3358.4249488178],
    [0.00000000043, 5.05297177283, 3229.4257844122],
    [0.00000000054, 6.11998016428, 16894.5103996106],
    [0.00000000043, 1.90603004035, 3451.7990689874],
    [0.00000000039, 0.50727886431, 10011.2006147496],
    [0.00000000052, 3.17851184154, 2324.9494088156],
    [0.00000000038, 4.88249540246, 3499.555944483],
    [0.00000000039, 5.28113083211, 3343.1552239806],
    [0.00000000039, 4.98185580267, 3468.5639597344],
    [0.00000000047, 2.16244218985, 10027.3602044068],
    [0.00000000037, 5.84953090935, 6791.431174619],
    [0.00000000048, 5.03779546898, 7064.1041319706],
    [0.00000000038, 0.58076516432, 8966.3875031733],
    [0.00000000051, 3.36181117037, 8976.6824439118],
    [0.00000000042, 4.13725767158, 8336.7851575978],
    [0.00000000038, 5.75425648893, 4531.5363185754],
    [0.00000000038, 3.55681323215, 5351.7127631396],
    [0.0000000004, 2.79414141035, 3067.9394693482],
    [0.0000000004, 4.99798468494, 10042.1925994982],
    [0.00000000037, 1.82286411009, 10017.9559447414],
    [0.00000000036, 6.02115369796, 6474.524116103],
    [0.00000000044, 3.01299253859, 7417.1013669314],
    [0.00000000045, 2.33470159894, 3123.7902129128],
    [0.00000000039, 4.91767933978, 8034.6153814074],
];

const L1: &[Term] = &[
    [3340.85627474342, 0.0, 0.0],
    [0.01458227051, 3.60426053609, 3340.6124266998],
    [0.00164901343, 3.92631250962, 6681.2248533996],
    [0.00019963338, 4.2659406103, 10021.8372800994],
    [0.00003452399, 4.73210386365, 3.523118349],
    [0.0000248548, 4.61277567318, 13362.4497067992],
    [0.00000841551, 4.45858256765, 2281.2304965106],
    [0.00000537566, 5.01589727492, 398.1490034082],
    [0.00000521041, 4.99422678175, 3344.1355450488],
    [0.00000432614, 2.5606640286, 191.4482661116],
    [0.00000429656, 5.31646162367, 155.4203994342],
    [0.00000381747, 3.53881289437, 796.2980068164],
    [0.00000314129, 4.96335266049, 16703.062133499],
    [0.00000282804, 3.15967518204, 2544.3144198834],
    [0.00000205664, 4.5689145566, 2146.1654164752],
    [0.00000168805, 1.32894813366, 3337.0893083508],
    [0.00000157587, 4.18501035954, 1751.539531416],
    [0.00000133686, 2.23325104196, 0.9803210682],
    [0.00000116561, 2.21347652545, 1059.3819301892],
    [0.00000117591, 6.02407213861, 6151.533888305],
    [0.00000113595, 5.42803224317, 3738.761430108],
    [0.00000133563, 5.97421903927, 1748.016413067],
    [0.00000091098, 1.09627836591, 1349.8674096588],
    [0.00000083301, 5.29636626272, 6684.7479717486],
    [0.00000113876, 2.12869455089, 1194.4470102246],
    [0.00000080776, 4.42813405865, 529.6909650946],
    [0.00000079531, 2.2486426633, 8962.4553499102],
    [0.00000072505, 5.8420816324, 242.728603974],
    [0.00000072946, 2.50189460554, 951.7184062506],
    [0.00000071487, 3.85636094435, 2914.0142358238],
    [0.00000085342, 3.90854841008, 553.5694028424],
    [0.00000067582, 5.02327686473, 382.8965322232],
    [0.00000065089, 1.01802439311, 3340.5951730476],
    [0.00000065089, 3.04879603978, 3340.629680352],
    [0.00000061508, 4.151831598, 3149.1641605882],
    [0.00000048477, 4.87362121538, 213.299095438],
    [0.00000046584, 1.31452419914, 3185.1920272656],
    [0.0000005652, 3.8881369932, 4136.9104335162],
    [0.00000047613, 1.18238046057, 3333.498879699],
    [0.00000041343, 0.71385375517, 1592.5960136328],
    [0.00000040055, 5.31611875491, 20043.6745601988],
    [0.00000040272, 2.72542480614, 7.1135470008],
    [0.00000032886, 5.41067411968, 6283.0758499914],
    [0.00000028244, 0.04534124888, 9492.1463150048],
    [0.00000022294, 5.88516997273, 3870.3033917944],
    [0.00000022431, 5.46592525433, 20.3553193988],
    [0.00000022612, 0.83775884934, 3097.88382272579],
    [0.00000021418, 5.37934044204, 3340.545116397],
    [0.00000023335, 6.16762213077, 3532.0606928114],
    [0.00000026579, 3.88960724782, 1221.8485663214],
    [0.00000022797, 1.54504711003, 2274.1169495098],
    [0.00000020431, 2.36353950189, 1589.0728952838],
    [0.00000020186, 3.36375535766, 5088.6288397668],
    [0.00000026554, 5.11271747607, 2700.7151403858],
    [0.00000019675, 2.57805423988, 12303.06777661],
    [0.00000019468, 0.49216434489, 6677.7017350506],
    [0.00000021104, 3.52525428062, 15.252471185],
    [0.00000021425, 4.97081508139, 3340.6797370026],
    [0.00000018505, 5.57863503922, 1990.745017041],
    [0.00000017811, 6.12537931996, 4292.3308329504],
    [0.00000016472, 2.60291845066, 3341.592747768],
    [0.00000016599, 1.25519718278, 3894.1818295422],
    [0.00000019455, 2.53112676345, 4399.994356889],
    [0.00000015, 1.03464802434, 2288.3440435114],
    [0.00000020029, 4.73119428749, 4690.4798363586],
    [0.00000015381, 2.4700947035, 4535.0594369244],
    [0.00000019964, 5.78652958398, 7079.3738568078],
    [0.00000015307, 2.26515985343, 3723.508958923],
    [0.00000014705, 3.36979890389, 6681.2421070518],
    [0.00000013535, 2.1233441041, 5486.777843175],
    [0.0000001295, 5.61929676688, 10025.3603984484],
    [0.00000012682, 2.95022113262, 3496.032826134],
    [0.00000013644, 1.97739547259, 5614.7293762096],
    [0.00000013013, 1.51424752315, 5628.9564702112],
    [0.00000014705, 1.33902715586, 6681.2075997474],
    [0.00000011353, 6.23438193885, 135.0650800354],
    [0.00000013275, 3.42243595774, 5621.8429232104],
    [0.00000010867, 5.28184140482, 2818.035008606],
    [0.0000001185, 3.12701832949, 426.598190876],
    [0.00000010472, 2.73581537999, 2787.0430238574],
    [0.00000011132, 5.84178807242, 2803.8079146044],
    [0.00000011764, 2.58551521265, 8432.7643848156],
    [0.00000011854, 5.4763068691, 3553.9115221378],
    [0.0000000849, 1.91378007528, 11773.3768115154],
    [0.00000009708, 4.52957217749, 6489.776587288],
    [0.00000008562, 3.16141186861, 162.4666361322],
    [0.00000010958, 4.15771850822, 2388.8940204492],
    [0.00000008133, 1.61295625304, 2957.7158944766],
    [0.0000000884, 4.23294294197, 7477.522860216],
    [0.00000008034, 5.69983564288, 6041.3275670856],
    [0.00000008344, 2.18273563186, 23.8784377478],
    [0.00000007696, 5.71877332978, 9623.6882766912],
    [0.00000008695, 4.43542512603, 5092.1519581158],
    [0.00000008434, 3.16292250873, 3347.7259737006],
    [0.00000006664, 5.07517838003, 8031.0922630584],
    [0.0000000865, 4.33256981793, 3339.6321056316],
    [0.00000007372, 6.17831593269, 3583.3410306738],
    [0.00000005726, 3.68120120299, 8429.2412664666],
    [0.00000006186, 3.54165967734, 692.1576012268],
    [0.00000005438, 1.0512968958, 4933.2084403326],
    [0.00000006108, 1.66240879939, 6525.8044539654],
    [0.00000005154, 1.14703246368, 28.4491874678],
    [0.0000000485, 5.29254832907, 6681.2921637024],
    [0.00000005467, 6.12511022569, 2487.4160449478],
    [0.00000004866, 3.10475368803, 5.5229243074],
    [0.0000000636, 2.11896608283, 5884.9268465832],
    [0.00000005223, 0.3744626412, 12832.7587417046],
    [0.0000000471, 0.23326120326, 36.0278666774],
    [0.00000004954, 2.44806818502, 5099.2655051166],
    [0.00000004861, 5.6050529887, 6467.9257579616],
    [0.00000004706, 0.02998416568, 7210.9158184942],
    [0.00000004845, 5.70115105957, 6681.1575430968],
    [0.00000005496, 2.01006612503, 522.5774180938],
    [0.00000004964, 1.51006845561, 1744.4259844152],
    [0.00000004443, 0.31208413867, 10018.3141617504],
    [0.00000005381, 0.18359380473, 2942.4634232916],
    [0.00000004075, 3.9558210833, 3.881335358],
    [0.00000005462, 0.19274227117, 7632.9432596502],
    [0.0000000411, 1.59535768711, 7234.794256242],
    [0.00000004287, 2.87635993968, 2810.9214616052],
    [0.00000005276, 2.22638595594, 3127.3133312618],
    [0.0000000445, 4.17005729081, 2906.900688823],
    [0.00000005144, 5.66878565669, 23384.2869868986],
    [0.00000003844, 2.2644218316, 2699.7348193176],
    [0.00000003514, 1.76463961051, 1758.6530784168],
    [0.00000003351, 2.66194137496, 4929.6853219836],
    [0.00000004299, 4.43057446968, 640.8776073822],
    [0.0000000314, 1.75866226873, 9595.2390892234],
    [0.00000003716, 2.91969220147, 15643.6802033098],
    [0.00000003249, 6.13937134379, 10419.9862835076],
    [0.00000003077, 2.56115174488, 7064.1213856228],
    [0.00000003208, 2.3251945308, 5085.038411115],
    [0.0000000293, 1.27797225349, 574.3447983348],
    [0.00000002771, 1.75664216142, 639.897286314],
    [0.00000003325, 2.58945297384, 2118.7638603784],
    [0.00000003187, 2.8664675151, 7740.6067835888],
    [0.0000000278, 0.43157089331, 5828.0284716476],
    [0.00000002824, 0.98500544471, 3191.0492295652],
    [0.00000003016, 1.86555882509, 7.046236698],
    [0.00000003364, 1.52847138842, 6674.1113063988],
    [0.00000002672, 3.70855172347, 10021.8545337516],
    [0.00000002636, 3.11790581052, 6836.6452528338],
    [0.00000002672, 1.67778079449, 10021.8200264472],
    [0.00000002563, 3.77294986894, 2921.1277828246],
    [0.00000002509, 0.30454165124, 3475.6775067352],
    [0.000000024, 0.96972421975, 3319.8370312074],
    [0.00000002262, 2.8139431495, 7875.6718636242],
    [0.00000002395, 2.96002707485, 6682.2051744678],
    [0.0000000221, 0.61263930586, 10973.55568635],
    [0.00000002248, 4.12382007742, 59.3738619136],
    [0.00000002426, 5.91508357946, 5331.3574437408],
    [0.00000002158, 2.17583545077, 15113.9892382152],
    [0.00000001941, 5.47668312685, 11371.7046897582],
    [0.00000001903, 5.11165653855, 1066.49547719],
    [0.0000000237, 3.87889340214, 3355.8648978848],
    [0.00000002299, 1.15914205086, 3320.257107301],
    [0.00000001944, 5.89081872133, 6894.5239488376],
    [0.00000001843, 3.07643314617, 3325.3599555148],
    [0.00000001809, 4.97905218276, 1648.4467571974],
    [0.00000002136, 1.91364787635, 8969.568896911],
    [0.00000002099, 3.00410255642, 6254.6266625236],
    [0.00000001915, 3.5590743174, 3767.2106175758],
    [0.00000001991, 5.37274107053, 206.1855484372],
    [0.00000001685, 5.49701299817, 266.6070417218],
    [0.00000001646, 1.31923405548, 3264.3463554242],
    [0.00000001732, 1.81361103995, 536.8045120954],
    [0.00000001723, 3.25900379342, 7903.073419721],
    [0.00000001564, 5.75428852012, 3360.96774609859],
    [0.00000001589, 1.73273563259, 3134.4268782626],
    [0.0000000169, 2.43213510013, 3120.199784261],
    [0.00000001549, 1.54016426558, 8425.6508378148],
    [0.00000001536, 5.88431472627, 20.7753954924],
    [0.0000000146, 4.89733072879, 9830.3890139878],
    [0.00000002023, 5.94808387002, 13365.9728251482],
    [0.00000001991, 3.11613326265, 3361.3878221922],
    [0.00000001401, 2.24482184868, 3344.2028553516],
    [0.00000001365, 4.58006320751, 10818.1352869158],
    [0.00000001392, 5.48931017516, 170.6728706192],
    [0.0000000136, 3.07974035205, 6127.6554505572],
    [0.00000001345, 1.18653158091, 14584.2982731206],
    [0.00000001717, 5.62501515015, 6158.6474353058],
    [0.00000001408, 1.82072980335, 3337.021998048],
    [0.00000001736, 2.01921900546, 10575.4066829418],
    [0.00000001402, 4.50079374387, 5729.506447149],
    [0.00000001266, 5.91088435118, 9808.5381846614],
    [0.00000001433, 6.05024653324, 12964.300703391],
    [0.00000001223, 0.82796258263, 419.4846438752],
    [0.00000001393, 1.05117949107, 6438.4962494256],
    [0.00000001272, 1.50116723856, 8439.8779318164],
    [0.00000001143, 4.89747373731, 220.4126424388],
    [0.00000001183, 3.52587190041, 6688.3384004004],
    [0.00000001132, 6.19236255633, 6144.4203413042],
    [0.00000001154, 2.2305848597, 8955.3418029094],
    [0.00000001129, 3.44264300692, 10177.2576795336],
    [0.00000001152, 5.29913300616, 27.4015560968],
    [0.00000001274, 4.5842123844, 6247.5131155228],
    [0.00000001093, 2.8262333236, 4569.574540022],
    [0.00000001303, 0.44350560735, 87.30820453981],
    [0.00000001335, 2.1420445773, 11243.6858464208],
    [0.00000001102, 1.96260837539, 6298.3283211764],
    [0.00000001066, 2.89865914321, 10404.7338123226],
    [0.00000001027, 4.79269049654, 3914.9572250346],
    [0.00000001015, 0.2284781873, 3230.4061054804],
    [0.00000001041, 3.73274497451, 10213.285546211],
    [0.00000001154, 4.14326179244, 6261.7402095244],
    [0.00000001306, 3.67645557029, 2301.58581590939],
    [0.00000001145, 5.12292846748, 4562.4609930212],
    [0.00000001275, 5.14333847164, 2693.601593385],
    [0.00000000914, 1.22398892152, 103.0927742186],
    [0.00000000955, 1.52875141393, 3369.0616141676],
    [0.00000000908, 0.48223420834, 13358.9265884502],
    [0.00000000892, 1.35161136807, 1214.7350193206],
    [0.00000000998, 3.2966588195, 3178.1457905676],
    [0.0000000098, 1.69212466625, 43.718912305],
    [0.00000000919, 2.45445889752, 13916.0191096416],
    [0.00000000899, 5.94990531529, 12168.0026965746],
    [0.00000000891, 5.63297246408, 10021.9045904022],
    [0.00000000922, 3.91483430303, 9225.539273283],
    [0.0000000093, 0.240730047, 6923.9534573736],
    [0.00000000923, 1.1039607445, 29.429508536],
    [0.00000000816, 4.65198282005, 2707.8286873866],
    [0.00000000791, 6.08595583868, 2384.3232707292],
    [0.0000000082, 4.80968546763, 533.2140834436],
    [0.00000000758, 2.06012386134, 12935.8515159232],
    [0.00000000738, 1.03564559078, 14314.1681130498],
    [0.00000000908, 0.69862047595, 16173.3711684044],
    [0.000000007, 4.0878823461, 5202.3582793352],
    [0.00000000829, 2.01062325398, 9866.4168806652],
    [0.00000000887, 6.04145842617, 10021.7699697966],
    [0.00000000768, 1.39532897827, 8273.8208670324],
    [0.00000000873, 4.45446600602, 3316.733988952],
    [0.00000000673, 3.02440642752, 1039.0266107904],
    [0.0000000066, 2.83410276989, 107.6635239386],
    [0.00000000838, 0.39195370222, 10551.528245194],
    [0.00000000708, 3.27560955336, 18984.2926300096],
    [0.00000000658, 6.01853128902, 26724.8994135984],
    [0.00000000685, 1.98132615912, 1228.9621133222],
    [0.00000000595, 0.10260171285, 111.1866422876],
    [0.00000000563, 1.59138368358, 2391.43681773],
    [0.00000000555, 2.7080196219, 4555.3474460204],
    [0.00000000696, 2.89276686038, 2648.454825473],
    [0.00000000587, 4.56017988729, 6680.2445323314],
    [0.0000000054, 2.86002662919, 5459.3762870782],
    [0.0000000053, 5.64877399946, 6034.2140200848],
    [0.0000000052, 0.20012848836, 13760.5987102074],
    [0.00000000552, 5.08766140543, 1903.4368125012],
    [0.00000000512, 3.21411265909, 11081.2192102886],
    [0.00000000641, 5.19459033638, 6048.4411140864],
    [0.00000000677, 3.87723948458, 13517.8701062334],
    [0.00000000534, 0.23224033336, 51.28033786241],
    [0.0000000067, 3.69368226469, 3335.0895023924],
    [0.00000000486, 2.41879628327, 3364.4908644476],
    [0.000000005, 4.31447859057, 3344.4937620578],
    [0.00000000481, 1.56481992611, 1964.838626854],
    [0.00000000504, 2.47456295599, 3863.1898447936],
    [0.00000000523, 0.65856269237, 853.196381752],
    [0.00000000481, 0.12971954679, 66.4874089144],
    [0.00000000535, 2.98601678918, 8270.2977486834],
    [0.0000000045, 2.02303462834, 13362.432453147],
    [0.00000000448, 5.59827312967, 149.5631971346],
    [0.00000000519, 2.75931838722, 3503.079062832],
    [0.00000000534, 4.77352933347, 1118.7557921028],
    [0.0000000045, 4.05380888708, 13362.4669604514],
    [0.00000000439, 4.83194205477, 3116.2676309979],
    [0.00000000567, 5.67483490268, 227.476132789],
    [0.00000000459, 3.44555998004, 6702.000248892],
    [0.00000000545, 2.01193901951, 7910.1869667218],
    [0.00000000425, 2.79854459343, 433.7117378768],
    [0.00000000429, 4.30113040289, 16858.4825329332],
    [0.00000000409, 0.0544800954, 3304.5845600224],
    [0.00000000434, 5.70806855136, 21.8508293264],
    [0.00000000399, 4.93233684937, 9779.1086761254],
    [0.00000000532, 1.31038986189, 6660.4494579072],
    [0.00000000398, 5.31345458361, 13119.72110282519],
    [0.00000000459, 2.53671963587, 74.7815985673],
    [0.00000000384, 2.29906801437, 12310.1813236108],
    [0.00000000467, 5.12562716972, 1596.1864422846],
    [0.00000000516, 5.84767782422, 1052.2683831884],
    [0.00000000414, 4.7540958261, 3981.490034082],
    [0.00000000365, 3.73271671549, 5518.7501489918],
    [0.00000000367, 0.13506394328, 56.8983749356],
    [0.00000000459, 0.15582180531, 9381.9399937854],
    [0.00000000392, 2.15845463651, 3980.5097130138],
    [0.00000000396, 1.48538591462, 17924.9106998204],
    [0.00000000456, 0.64517343174, 6816.289933435],
    [0.00000000358, 5.87219240658, 3607.2194684216],
    [0.0000000049, 0.65766946042, 3376.6402933772],
    [0.00000000365, 1.91816243676, 3347.6586633978],
    [0.00000000397, 1.80006148744, 7895.9598727202],
    [0.00000000336, 2.14687780119, 6677.6344247478],
    [0.0000000034, 2.88185925998, 17256.6315363414],
    [0.00000000334, 6.13670038311, 5724.935697429],
    [0.00000000339, 4.08527025169, 664.75604513],
    [0.00000000432, 2.52188285182, 18454.601664915],
    [0.00000000336, 4.22863444521, 6696.4773245846],
    [0.00000000342, 5.96724705923, 3546.797975137],
    [0.00000000326, 4.02557052581, 6872.6731195112],
    [0.00000000323, 5.05444843838, 3237.5196524812],
    [0.00000000324, 2.89151245241, 8329.671610597],
    [0.00000000321, 6.25886976298, 10235.1363755374],
    [0.00000000333, 2.57725424455, 6684.8152820514],
    [0.00000000356, 6.27424874986, 8671.9698704406],
    [0.00000000319, 5.05665355586, 36.6053653042],
    [0.00000000305, 3.88755666972, 7107.8230442756],
    [0.00000000322, 6.28125601341, 16706.585251848],
    [0.00000000334, 3.15240620873, 11216.284290324],
    [0.00000000287, 6.16467002771, 3973.396166013],
    [0.00000000283, 2.67802456636, 3877.4169387952],
    [0.00000000283, 1.6629315709, 1692.1656695024],
    [0.00000000276, 2.94210551399, 3415.3940252671],
    [0.00000000275, 0.53418048945, 17395.2197347258],
    [0.00000000355, 3.31406527401, 10022.8176011676],
    [0.00000000311, 1.50310910269, 6660.8695340008],
    [0.00000000269, 1.84517097065, 11780.4903585162],
    [0.0000000027, 4.42425307819, 310.8407988684],
    [0.00000000275, 3.58464612058, 128.0188433374],
    [0.00000000275, 2.2252353958, 3017.1070100424],
    [0.00000000312, 5.15950395287, 7255.5696517344],
    [0.00000000299, 0.72552273097, 155.3530891314],
    [0.00000000353, 5.7004779835, 16460.33352952499],
    [0.00000000267, 5.97864271046, 9499.2598620056],
    [0.0000000027, 0.77063210836, 11236.57229942],
    [0.00000000339, 3.360921489, 5625.3660415594],
    [0.00000000315, 2.33795159922, 3281.2385647862],
    [0.00000000247, 3.71002922076, 7373.3824546264],
    [0.00000000328, 0.18162415648, 5618.3198048614],
    [0.00000000247, 6.27486009856, 15508.6151232744],
    [0.00000000292, 0.14989609091, 16304.9131300908],
    [0.00000000326, 4.53606745007, 2178.137722292],
    [0.00000000286, 5.47710043383, 9168.6408983474],
    [0.00000000246, 1.4983871248, 15110.4661198662],
    [0.00000000262, 2.58821936465, 3336.7310913418],
    [0.00000000244, 0.84015413449, 16062.1845261168],
    [0.00000000245, 0.37772563756, 12721.572099417],
    [0.0000000025, 2.26824758119, 6784.3176276182],
    [0.00000000248, 6.22740483254, 13149.1506113612],
    [0.00000000255, 4.93078809107, 14158.7477136156],
    [0.0000000024, 6.15843594225, 19800.9459562248],
    [0.00000000249, 5.47044926479, 4407.1079038898],
    [0.00000000235, 5.38750866169, 76.2660712756],
    [0.00000000258, 6.10384464886, 2480.302497947],
    [0.00000000306, 5.35546231697, 2766.267628365],
    [0.00000000236, 5.25670707064, 13171.0014406876],
    [0.00000000224, 4.52466909993, 12566.1516999828],
    [0.0000000022, 5.83694256642, 13936.794505134],
    [0.00000000271, 1.42460945147, 14054.607308026],
    [0.00000000213, 0.21127914063, 1505.28780909299],
    [0.00000000267, 5.16501015011, 3205.5473466644],
    [0.00000000212, 4.26202838353, 6546.1597733642],
    [0.00000000211, 6.21401684263, 3253.30422216],
    [0.00000000233, 3.72007597749, 3346.1353510072],
    [0.00000000274, 2.91986569135, 10713.9948813262],
    [0.00000000201, 3.36695295492, 6.6836638741],
    [0.00000000223, 3.08788599159, 401.6721217572],
    [0.00000000234, 2.24268269202, 110.2063212194],
    [0.00000000264, 2.0817874274, 6475.0393049624],
    [0.00000000231, 4.5380638448, 9602.3526362242],
    [0.00000000213, 2.85452302656, 5415.6573747732],
    [0.00000000195, 0.99589439506, 5642.1982426092],
    [0.00000000259, 0.00464351114, 9380.9596727172],
    [0.00000000197, 3.32573550633, 3657.0042963564],
    [0.00000000228, 5.33299975472, 3561.0250691386],
    [0.00000000193, 1.25502846507, 6606.4432548323],
    [0.00000000199, 1.13665869139, 685.044054226],
    [0.00000000227, 4.49610509002, 589.0648270082],
    [0.00000000217, 5.48740879816, 10596.1820784342],
    [0.00000000192, 4.26501800444, 3333.5661900018],
    [0.00000000188, 1.44301618203, 4885.9664096786],
    [0.00000000178, 4.82506490541, 9070.1188738488],
    [0.00000000184, 5.69637552141, 3351.2490920496],
    [0.00000000187, 0.76021337348, 16699.53901514999],
    [0.00000000226, 0.82767654373, 3265.8308281325],
    [0.00000000204, 6.20933387021, 394.6258850592],
    [0.00000000176, 3.89567349231, 10028.9508271002],
    [0.00000000174, 3.68843293982, 735.8765135318],
    [0.00000000173, 2.44269377255, 3603.6963500726],
    [0.00000000177, 1.24154853329, 12722.5524204852],
    [0.00000000184, 4.77203925989, 286.9623611206],
    [0.00000000171, 4.67140116008, 20199.094959633],
    [0.0000000017, 5.13753345526, 1332.0548875408],
    [0.00000000201, 2.37863157745, 16276.463942623],
    [0.00000000209, 0.57156268506, 11250.7993934216],
    [0.00000000164, 1.98441291396, 10014.7237330986],
    [0.00000000191, 0.60250751218, 56.8032621698],
    [0.00000000171, 6.22556266993, 17277.4069318338],
    [0.00000000166, 1.05948008727, 19513.9835951042],
    [0.00000000163, 1.59661610701, 1437.1756141986],
    [0.00000000165, 3.36308723589, 6665.9723822146],
    [0.00000000184, 3.20554894393, 263.0839233728],
    [0.00000000212, 3.10485836003, 4039.8835749274],
    [0.00000000176, 3.41768939214, 9468.267877257],
    [0.00000000163, 1.39275730949, 8982.810669309],
    [0.00000000213, 3.39734274482, 931.3630868518],
    [0.00000000189, 4.54004144896, 8542.970706035],
    [0.00000000191, 1.15555618959, 3169.9395560806],
    [0.00000000155, 1.41249963094, 22.7684966094],
    [0.00000000153, 5.14168081601, 156.4007205024],
    [0.00000000159, 3.64996617906, 8013.2797409404],
    [0.00000000151, 1.93804487507, 3384.3313390048],
    [0.00000000157, 0.58554505759, 158.9435177832],
    [0.00000000173, 2.72517427493, 2807.3983432562],
    [0.00000000159, 0.67192454133, 13892.1406718938],
    [0.0000000015, 2.66045714174, 19004.6479494084],
    [0.00000000192, 5.73782632783, 206.7007372966],
    [0.00000000143, 3.19213280913, 6843.6914895318],
    [0.00000000194, 1.32358882667, 19402.7969528166],
    [0.00000000143, 2.3647816372, 13207.029307365],
    [0.0000000014, 1.8880056884, 11766.2632645146],
    [0.00000000144, 0.69018080218, 17085.9586657222],
    [0.00000000183, 5.98085295555, 13362.517017102],
    [0.00000000161, 2.92764155222, 5.8572022996],
    [0.00000000162, 6.07051064413, 6701.5801727984],
    [0.00000000192, 0.86266150575, 2814.4445799542],
    [0.00000000182, 5.26446797092, 3873.8265101434],
    [0.00000000137, 0.41563614709, 5820.9149246468],
    [0.00000000144, 3.02314051168, 708.98980227659],
    [0.00000000184, 4.61314496499, 3329.97576135],
    [0.00000000131, 3.48156082643, 367.2243289624],
    [0.00000000173, 3.09922849765, 12295.9542296092],
    [0.00000000135, 2.23311632892, 15664.03552270859],
    [0.00000000147, 1.95810911154, 5732.0492444298],
    [0.00000000158, 1.48909254724, 29.4918183034],
    [0.00000000127, 5.5553408004, 3368.0139827966],
    [0.00000000129, 1.78002583252, 22743.4093795164],
    [0.00000000132, 2.81496895377, 21795.21409161479],
    [0.00000000127, 5.73090203501, 3340.19235060619],
    [0.00000000164, 1.87613918877, 6709.6740408674],
    [0.00000000123, 3.61238958991, 22324.9050567094],
    [0.00000000129, 4.92064308735, 2540.7913015344],
    [0.00000000121, 6.16922638434, 20206.141196331],
    [0.00000000122, 5.79901866314, 1854.6323056346],
    [0.00000000133, 0.50941998058, 3274.1250177854],
    [0.00000000151, 1.61342807879, 1107.1388056848],
    [0.00000000165, 2.02795177586, 290.4854794696],
    [0.00000000125, 0.52719797619, 2604.735913168],
    [0.00000000144, 5.68526782434, 8827.3902698748],
    [0.00000000126, 3.80246508251, 765.7930644464],
    [0.00000000116, 1.79450246249, 647.0108333148],
    [0.00000000126, 2.00195272473, 699.2711482276],
    [0.00000000147, 6.22619740782, 6040.3472460174],
    [0.00000000119, 2.05840518265, 15121.102785216],
    [0.00000000114, 2.7487709147, 6460.8122109608],
    [0.00000000155, 1.78154091696, 21265.5231265202],
    [0.00000000146, 3.37351237411, 1861.7458526354],
    [0.00000000118, 4.07281676691, 418.504322807],
    [0.00000000116, 0.10434606071, 13362.3823964964],
    [0.00000000129, 0.78419803719, 3427.9206312396],
    [0.00000000152, 0.32620694442, 3443.7052009184],
    [0.0000000011, 0.56398082486, 661.232926781],
    [0.00000000111, 4.05380946072, 568.8218740274],
    [0.00000000108, 3.17700641574, 3448.2759506384],
    [0.00000000138, 4.47698517191, 3326.3853326982],
    [0.00000000108, 4.89922372003, 9588.1255422226],
    [0.00000000114, 4.80828825403, 6657.3464156518],
    [0.00000000108, 4.10637483972, 13553.8979729108],
    [0.00000000125, 0.33573243959, 18849.2275499742],
    [0.00000000115, 3.18885465852, 2409.249339848],
    [0.00000000104, 3.23074163851, 3472.1543883862],
    [0.00000000104, 0.09799515047, 30065.5118402982],
    [0.00000000112, 1.64487733528, 10001.061884607],
    [0.00000000143, 3.53781769283, 6518.7582172674],
    [0.00000000113, 5.20979306912, 2125.8774073792],
    [0.00000000104, 2.77582098882, 38.1330356378],
    [0.00000000133, 5.88513337452, 5835.1420186484],
    [0.00000000105, 4.11662579413, 6675.7019290922],
    [0.00000000102, 0.60100887043, 10264.5658840734],
    [0.00000000101, 3.78636130664, 10042.6126755918],
    [0.00000000139, 1.80936944447, 12323.4230960088],
    [0.00000000101, 2.47217208753, 7380.4960016272],
    [0.0000000013, 2.53454569863, 11769.8536931664],
    [0.000000001, 5.72291104291, 14.2270940016],
    [0.00000000135, 4.2023756451, 4672.6673142406],
    [0.00000000133, 0.34413768012, 16489.763038061],
    [0.00000000098, 1.44874403589, 3370.0419352358],
    [0.00000000131, 1.31336606248, 3313.210870603],
    [0.00000000111, 3.12463539337, 309.2783226558],
    [0.00000000101, 3.15369992044, 24150.080051345],
    [0.00000000102, 6.13479937096, 2277.7073781616],
    [0.00000000099, 0.10085261274, 12839.8722887054],
    [0.00000000134, 2.91637947295, 57.8786960038],
    [0.00000000104, 3.3028305233, 3399.9862886134],
    [0.00000000108, 4.92699760221, 802.3639224462],
    [0.00000000106, 2.89298330043, 7799.9806455024],
    [0.00000000112, 3.12761163915, 5989.0672521728],
    [0.00000000094, 3.42562596561, 3510.1926098328],
    [0.00000000102, 0.94285421551, 3209.0704650134],
    [0.00000000096, 0.79636181668, 3024.2205570432],
    [0.00000000093, 1.08979608844, 14577.1847261198],
    [0.00000000097, 3.56551535742, 14421.8316369884],
    [0.00000000092, 5.0227963751, 2494.5295919486],
    [0.00000000123, 5.83481108101, 7747.7203305896],
    [0.00000000111, 3.31406538379, 11610.9101753832],
    [0.00000000118, 5.0084532296, 1581.959348283],
    [0.00000000091, 2.36839307589, 11140.5930722022],
    [0.00000000099, 2.93269536697, 2067.9314010726],
    [0.00000000124, 3.15220420912, 22345.2603761082],
    [0.0000000009, 0.85462370851, 17232.7530985936],
    [0.00000000125, 1.54866979468, 1435.1476617594],
    [0.00000000113, 4.57220387105, 14712.317116458],
    [0.00000000103, 0.11158194413, 11.0457002639],
    [0.00000000113, 2.41110151532, 5244.049239201],
    [0.00000000091, 1.7718473028, 2221.856634597],
    [0.00000000114, 1.92696878615, 8226.5788363784],
    [0.00000000118, 0.29322259611, 2945.9865416406],
    [0.00000000089, 4.49875865671, 21947.1113727],
    [0.00000000104, 1.36766858693, 4032.7700279266],
    [0.00000000116, 4.67476277278, 272.6729573516],
    [0.00000000105, 3.7332797385, 4989.0591838972],
    [0.00000000095, 0.34653808205, 13517.8027959306],
    [0.00000000086, 2.70925448214, 7218.029365495],
    [0.00000000112, 5.27572276726, 17499.3601403154],
    [0.00000000114, 3.37335971932, 2938.9403049426],
    [0.0000000009, 0.26623024836, 9485.032768004],
    [0.00000000086, 3.66786582491, 6997.6167230562],
    [0.00000000087, 4.0782360868, 18606.4989460002],
    [0.00000000117, 5.61863859185, 16511.6138673874],
    [0.00000000084, 2.80171829534, 8584.6616659008],
    [0.00000000086, 5.87459621301, 73.6009559152],
    [0.0000000009, 1.07789160729, 10721.108428327],
    [0.00000000084, 0.78729386249, 146.8116865236],
    [0.00000000112, 2.31690430881, 9638.9407478762],
    [0.00000000083, 5.90575201511, 16858.41522263039],
    [0.00000000082, 4.316905577, 9374.8264467846],
    [0.00000000083, 1.41315204958, 22854.596021804],
    [0.00000000084, 0.90320571725, 2171.0241752912],
    [0.00000000082, 1.59442952041, 9947.0556815321],
    [0.00000000082, 0.44163602941, 4782.87363546],
    [0.00000000086, 5.18335054161, 12410.7313005486],
    [0.00000000085, 3.61669636863, 8965.9784682592],
    [0.00000000097, 5.3551176514, 4996.172730898],
    [0.00000000085, 2.36814442737, 1062.9050485382],
    [0.00000000078, 1.75580354602, 2060.8178540718],
    [0.00000000087, 0.98702744399, 10156.9023601348],
    [0.00000000098, 0.35294347682, 23546.7536230308],
    [0.00000000101, 1.03298143418, 20040.15144184979],
    [0.00000000088, 0.56201084357, 17101.2111369072],
    [0.00000000082, 2.65765057749, 12979.553174576],
    [0.00000000085, 1.07007237991, 10706.8813343254],
    [0.00000000082, 0.8058839632, 20735.83216142559],
    [0.00000000092, 4.87180501294, 9389.0535407862],
    [0.00000000078, 3.22869264518, 11925.2740926006],
    [0.00000000074, 5.59171946181, 8535.8571590342],
    [0.0000000008, 0.42260849968, 956.2891559706],
    [0.00000000082, 1.47379060963, 16.83220104979],
    [0.00000000073, 3.76950560688, 8859.3625756916],
    [0.00000000073, 4.5913018263, 362.1211367308],
    [0.00000000072, 5.15373872266, 9872.2740829648],
    [0.00000000098, 2.47740242208, 5401.4302807716],
    [0.00000000071, 0.08395696279, 15849.865751747],
    [0.00000000078, 0.04212599783, 16703.1294438018],
    [0.00000000075, 3.77172360793, 4845.9002357928],
    [0.00000000072, 2.01742377451, 1329.51209026],
    [0.00000000076, 0.30413402871, 72.0557333548],
    [0.00000000097, 5.1510931855, 1.4844727083],
    [0.0000000007, 0.33648335823, 23141.5583829246],
    [0.00000000068, 0.34828385806, 20047.1976785478],
    [0.00000000078, 1.42772075938, 16063.164847185],
    [0.00000000081, 2.37498404818, 16703.0448798468],
    [0.00000000069, 3.66727984195, 13363.4300278674],
    [0.00000000067, 1.77194706681, 18451.07854656599],
    [0.00000000073, 0.41181711796, 33406.124266998],
    [0.00000000067, 3.1594684038, 8799.988713778],
    [0.00000000067, 4.07602260745, 10448.4354709754],
    [0.00000000068, 1.78981361818, 224.3447957019],
    [0.00000000066, 1.01449371817, 4193.8088084518],
    [0.00000000067, 4.89249339125, 12082.6551341712],
    [0.00000000081, 0.61914094848, 949.1756089698],
    [0.00000000066, 3.39914635235, 10184.3039162316],
    [0.00000000064, 5.50528849889, 4936.7988689844],
    [0.00000000064, 1.8260823549, 3077.528503327],
    [0.00000000069, 2.48571574894, 10018.2468514476],
    [0.00000000064, 2.8044732232, 20809.4676246452],
    [0.00000000068, 0.9790733543, 6717.252720077],
    [0.00000000087, 2.45966764758, 7321.1221397136],
    [0.00000000062, 1.69131771765, 632.7837393132],
    [0.00000000081, 4.40575713075, 16703.07938715119],
    [0.00000000063, 3.63625395496, 25685.872802808],
    [0.00000000075, 5.54907590704, 16872.642316632],
    [0.00000000061, 0.33159827734, 12012.5822971404],
    [0.00000000063, 3.16314818302, 11670.2840372968],
    [0.00000000062, 0.23148800541, 7314.0085927128],
    [0.00000000078, 1.65377731167, 11614.4332937322],
    [0.00000000068, 1.10866475394, 6155.057006654],
    [0.00000000068, 4.45713540461, 9175.7544453482],
    [0.00000000081, 3.66553577428, 15265.8865193004],
    [0.00000000068, 5.59792852411, 377.3736079158],
    [0.00000000059, 6.25689995147, 41427.4869831788],
    [0.00000000072, 3.39739853142, 685.1113645288],
    [0.00000000062, 0.11206359088, 14047.4937610252],
    [0.00000000057, 4.31819630987, 95.9792272178],
    [0.0000000007, 5.98596344975, 6531.661656265],
    [0.00000000066, 5.93804470886, 3490.1756238344],
    [0.00000000056, 5.11205539684, 7322.1024607818],
    [0.00000000056, 3.36788837326, 4379.6390374902],
    [0.00000000056, 2.20908914878, 6688.2710900976],
    [0.00000000057, 4.57828186723, 10037.0897512844],
    [0.00000000057, 0.04695703833, 24889.5747959916],
    [0.00000000065, 2.70973517401, 19617.07636932279],
    [0.00000000068, 3.51423189318, 14556.8967170238],
    [0.00000000056, 5.94452825242, 21548.9623692918],
    [0.00000000056, 3.94541346495, 25665.5174834092],
    [0.00000000055, 0.45166365461, 16702.9948231962],
    [0.00000000062, 0.05229160039, 14061.7208550268],
    [0.00000000055, 1.14774475393, 4459.3682188026],
    [0.00000000065, 6.21442820689, 6947.8318951214],
    [0.00000000056, 5.01712943722, 485.9720527896],
    [0.00000000065, 1.51615558729, 5511.636601991],
    [0.00000000072, 4.90742373357, 25287.7237993998],
    [0.00000000057, 5.31542907454, 28628.3362260996],
    [0.00000000055, 4.02023620788, 4005.3684718298],
    [0.00000000054, 5.51196184505, 44.6538332402],
    [0.00000000053, 0.46840976995, 19645.5255567906],
    [0.00000000053, 4.51539970261, 9886.772200064],
    [0.00000000069, 3.37092084432, 41.5507909848],
    [0.00000000072, 4.66520155151, 6685.1061887576],
    [0.00000000052, 2.05209599225, 7366.2689076256],
    [0.00000000052, 6.25882226723, 12509.2533250472],
    [0.0000000006, 0.33350021257, 13575.7488022372],
    [0.00000000059, 5.94433755684, 625.6701923124],
    [0.0000000005, 2.65624501709, 10124.930054318],
    [0.00000000068, 2.92105834159, 10025.4277087512],
    [0.00000000051, 2.88289068067, 39601.8919124496],
    [0.00000000069, 1.09637075565, 24076.4445881254],
    [0.00000000052, 2.65290577481, 15650.7937503106],
    [0.00000000052, 3.2868331301, 6756.0064519669],
    [0.00000000054, 5.34683925496, 6578.132079181],
    [0.00000000054, 2.77410607136, 6705.1032911474],
    [0.00000000049, 2.657002099, 6944.3087767724],
    [0.00000000053, 5.67436244967, 1883.0814931024],
    [0.00000000048, 5.68336050679, 8646.0634802536],
    [0.00000000051, 0.113906433, 17402.3332817266],
    [0.00000000065, 1.03099992649, 4106.4054911462],
    [0.0000000006, 1.00159365247, 151.8972810852],
    [0.0000000005, 3.84651247899, 45494.58142974879],
    [0.00000000047, 3.03959709242, 5408.5438277724],
    [0.00000000063, 4.16165369755, 8186.5126624926],
    [0.00000000046, 2.69368087378, 16547.6417340648],
    [0.00000000051, 2.99576014378, 3774.3241645766],
    [0.00000000044, 2.00664763411, 6418.1409300268],
    [0.00000000045, 4.01853755929, 19406.6782881746],
    [0.00000000058, 3.1447475355, 4025.6564809258],
    [0.0000000005, 2.59881540437, 6621.850991486],
    [0.00000000043, 4.87912487459, 6414.6178116778],
    [0.00000000042, 5.20400092044, 4447.7512323846],
    [0.00000000051, 1.99634375899, 5032.7780962022],
    [0.00000000043, 1.28813888865, 6643.0918177618],
    [0.0000000004, 0.9680161856, 14591.4118201214],
    [0.00000000039, 1.84985100829, 10001.48196070061],
    [0.00000000039, 5.69967200167, 6106.8800550648],
    [0.00000000038, 3.27498743518, 18052.9295431578],
    [0.00000000039, 2.84167905068, 6652.7756659318],
    [0.00000000044, 0.57891618854, 16865.5287696312],
    [0.00000000043, 4.61937364869, 3341.0325027934],
    [0.00000000042, 6.02555835659, 6691.8615187494],
    [0.00000000034, 4.9773499235, 6670.5881880498],
    [0.00000000033, 1.39167727215, 4825.544916394],
    [0.00000000035, 6.02955363644, 3568.0885594888],
    [0.00000000035, 0.31961016732, 6645.1969867222],
    [0.00000000032, 5.63043769073, 3511.285297319],
    [0.00000000031, 5.4297846421, 9945.5712088238],
    [0.00000000038, 5.66461657503, 3416.8784979754],
    [0.0000000003, 0.98518793666, 20426.571092422],
    [0.00000000038, 0.12870962242, 6604.958782124],
    [0.00000000037, 5.48374357342, 3311.18291816379],
    [0.00000000032, 6.1110697981, 4392.8808098882],
    [0.00000000031, 3.18481282781, 3341.0423098265],
    [0.00000000034, 2.32358226279, 9072.6616711296],
    [0.00000000039, 4.11042361929, 3312.163239232],
    [0.00000000027, 0.57810321636, 3391.89276456221],
    [0.00000000029, 2.48646403166, 9815.6517316622],
    [0.00000000031, 0.44265747667, 3451.7990689874],
    [0.00000000027, 6.13498177783, 3362.4632560262],
    [0.00000000027, 6.21846173482, 5223.6939198022],
    [0.00000000027, 2.94945830517, 7203.8022714934],
    [0.00000000027, 3.261798558, 8756.269801473],
    [0.00000000027, 3.943852717, 23958.6317852334],
    [0.00000000033, 3.77237326006, 12808.8803039568],
    [0.0000000003, 4.75096367323, 15906.7641266826],
    [0.00000000031, 0.88248871193, 3340.1825435731],
    [0.00000000025, 0.31303295413, 6571.0185321802],
    [0.00000000031, 4.29076841627, 10020.8569590312],
    [0.00000000026, 2.22427360058, 10050.2864675672],
    [0.00000000025, 0.67881122439, 23937.856389741],
    [0.00000000031, 1.72899093511, 13745.3462390224],
    [0.00000000024, 0.20355912395, 3229.4257844122],
    [0.00000000032, 3.37195631109, 2284.7536148596],
];

const L2: &[Term] = &[
    [0.00058015791, 2.04979463279, 3340.6124266998],
    [0.00054187645, 0.0, 0.0],
    [0.00013908426, 2.45742359888, 6681.2248533996],
    [0.00002465104, 2.80000020929, 10021.8372800994],
    [0.00000398379, 3.14118428289, 13362.4497067992],
    [0.00000222022, 3.19436080019, 3.523118349],
    [0.00000120957, 0.54325292454, 155.4203994342],
    [0.00000061517, 3.48529427371, 16703.062133499],
    [0.00000053638, 3.54191121461, 3344.1355450488],
    [0.00000034268, 6.00188499119, 2281.2304965106],
    [0.00000031665, 4.14015171788, 191.4482661116],
    [0.00000029839, 1.99870679845, 796.2980068164],
    [0.00000023168, 4.33403365928, 242.728603974],
    [0.00000021659, 3.44532466378, 398.1490034082],
    [0.00000016044, 6.11000472441, 2146.1654164752],
    [0.0000002037, 5.421913754, 553.5694028424],
    [0.00000014927, 6.09541783564, 3185.1920272656],
    [0.00000016227, 0.65678953303, 0.9803210682],
    [0.00000014317, 2.61851897591, 1349.8674096588],
    [0.00000014416, 4.01923812101, 951.7184062506],
    [0.00000011934, 3.86122163021, 6684.7479717486],
    [0.00000015648, 1.2208612194, 1748.016413067],
    [0.0000001126, 4.71822363671, 2544.3144198834],
    [0.00000013352, 0.60189008414, 1194.4470102246],
    [0.00000010396, 0.25038714677, 382.8965322232],
    [0.00000009468, 0.68170713564, 1059.3819301892],
    [0.00000009229, 3.83209092321, 20043.6745601988],
    [0.00000009005, 3.88271826102, 3738.761430108],
    [0.00000007501, 5.46498630412, 1751.539531416],
    [0.00000006497, 5.47773072872, 1592.5960136328],
    [0.00000006311, 2.34104793674, 3097.88382272579],
    [0.00000006859, 2.57522504136, 3149.1641605882],
    [0.0000000587, 1.14783576679, 7.1135470008],
    [0.00000006681, 2.37843690339, 4136.9104335162],
    [0.00000004647, 4.42957708526, 6151.533888305],
    [0.00000004166, 3.68631477611, 5614.7293762096],
    [0.00000004764, 2.89684755585, 3333.498879699],
    [0.00000004045, 6.12493402657, 5628.9564702112],
    [0.00000003653, 4.06679068397, 1990.745017041],
    [0.00000003618, 2.46868561769, 529.6909650946],
    [0.00000003277, 0.68101740787, 8962.4553499102],
    [0.00000003253, 2.7956534039, 3894.1818295422],
    [0.00000003091, 4.56861203364, 3496.032826134],
    [0.00000002921, 5.41458945995, 2914.0142358238],
    [0.00000002921, 1.23050883841, 2787.0430238574],
    [0.00000002784, 1.38911141844, 4292.3308329504],
    [0.0000000262, 1.04061894134, 3341.592747768],
    [0.00000002888, 3.41062353663, 3337.0893083508],
    [0.00000002418, 0.96341462666, 4535.0594369244],
    [0.00000002357, 4.84628239765, 9492.1463150048],
    [0.00000002593, 5.74934234498, 3340.5951730476],
    [0.00000002191, 3.26449527357, 213.299095438],
    [0.00000002594, 1.49510566123, 3340.629680352],
    [0.00000002344, 4.18104725028, 10025.3603984484],
    [0.0000000263, 4.67640929857, 3583.3410306738],
    [0.00000002602, 2.64911714813, 2388.8940204492],
    [0.0000000183, 0.97181050149, 1589.0728952838],
    [0.00000002416, 1.04749173375, 4399.994356889],
    [0.00000002386, 4.2707257555, 7079.3738568078],
    [0.00000002187, 0.16036551231, 6525.8044539654],
    [0.00000002344, 0.01425578204, 4690.4798363586],
    [0.00000001617, 4.95614491689, 5088.6288397668],
    [0.00000001633, 1.10703599922, 12303.06777661],
    [0.00000002126, 0.48290227706, 2700.7151403858],
    [0.00000001629, 4.94267977718, 1221.8485663214],
    [0.00000001504, 0.11031912519, 2957.7158944766],
    [0.00000001759, 3.81170701376, 3723.508958923],
    [0.00000001401, 3.85907867678, 6283.0758499914],
    [0.00000001338, 5.29685392418, 6677.7017350506],
    [0.00000001763, 2.51660121293, 2810.9214616052],
    [0.00000001392, 2.73498041122, 7477.522860216],
    [0.00000001431, 2.97747408389, 6489.776587288],
    [0.00000001236, 3.7724596559, 2699.7348193176],
    [0.00000001234, 1.88931735265, 6681.2421070518],
    [0.00000001513, 2.92614134711, 640.8776073822],
    [0.00000001234, 6.14168429036, 6681.2075997474],
    [0.00000001408, 1.54395721611, 3347.7259737006],
    [0.00000001038, 5.82880072933, 4933.2084403326],
    [0.00000001156, 1.50825464304, 426.598190876],
    [0.00000001362, 4.1779429752, 23384.2869868986],
    [0.00000001135, 3.77506455273, 3870.3033917944],
    [0.00000000916, 3.81726339298, 5092.1519581158],
    [0.00000000853, 3.82520490669, 3340.545116397],
    [0.00000001077, 5.0506282876, 5621.8429232104],
    [0.00000001074, 3.8144692047, 3553.9115221378],
    [0.00000000847, 3.41702696402, 3340.6797370026],
    [0.0000000092, 1.91108056416, 3532.0606928114],
    [0.00000000738, 4.25786145387, 9623.6882766912],
    [0.00000000908, 4.12911006922, 162.4666361322],
    [0.00000000647, 3.10301033831, 7234.794256242],
    [0.000000008, 5.20674574801, 87.30820453981],
    [0.00000000657, 1.57895580467, 2487.4160449478],
    [0.0000000065, 2.78932995437, 574.3447983348],
    [0.00000000659, 5.16655918817, 12832.7587417046],
    [0.00000000712, 5.79288230676, 3339.6321056316],
    [0.0000000066, 0.25125103909, 8969.568896911],
    [0.00000000527, 4.62218528897, 10419.9862835076],
    [0.00000000607, 3.84724721085, 5486.777843175],
    [0.000000005, 4.66323134619, 6836.6452528338],
    [0.00000000509, 0.32548381735, 8031.0922630584],
    [0.00000000613, 1.72250879737, 7632.9432596502],
    [0.00000000516, 1.37906978509, 7740.6067835888],
    [0.00000000469, 1.31324778369, 7875.6718636242],
    [0.00000000442, 5.34515135225, 10018.3141617504],
    [0.00000000496, 4.49656852602, 692.1576012268],
    [0.00000000544, 1.444653692, 15643.6802033098],
    [0.00000000467, 1.40928870138, 6682.2051744678],
    [0.00000000547, 4.42021065522, 5331.3574437408],
    [0.00000000433, 1.25048504108, 4929.6853219836],
    [0.00000000409, 3.80689273098, 6681.2921637024],
    [0.00000000403, 1.5719023931, 6127.6554505572],
    [0.00000000401, 4.59976459753, 7210.9158184942],
    [0.00000000406, 0.60945437905, 11773.3768115154],
    [0.00000000367, 0.97726583907, 6041.3275670856],
    [0.00000000361, 0.13117924893, 639.897286314],
    [0.00000000411, 4.21323421517, 6681.1575430968],
    [0.00000000441, 4.49050100878, 13365.9728251482],
    [0.00000000474, 5.1856252413, 2301.58581590939],
    [0.00000000334, 2.21001303889, 10021.8545337516],
    [0.0000000037, 5.02880065186, 6923.9534573736],
    [0.00000000333, 0.18229887483, 10021.8200264472],
    [0.00000000342, 2.49988747611, 6438.4962494256],
    [0.0000000032, 1.3237447689, 2118.7638603784],
    [0.0000000033, 2.98027481579, 5729.506447149],
    [0.0000000034, 0.51409045792, 9866.4168806652],
    [0.00000000283, 4.03219455446, 8955.3418029094],
    [0.00000000281, 3.33891891806, 9830.3890139878],
    [0.00000000271, 1.53144358045, 1039.0266107904],
    [0.00000000252, 3.04356928941, 10818.1352869158],
    [0.0000000027, 2.22972724035, 5828.0284716476],
    [0.00000000259, 4.24406546278, 6894.5239488376],
    [0.00000000237, 5.07818982743, 8429.2412664666],
    [0.00000000263, 2.00552313665, 3767.2106175758],
    [0.00000000241, 4.06396704332, 7064.1213856228],
    [0.0000000025, 0.45422818547, 6298.3283211764],
    [0.0000000024, 1.94655459341, 6688.3384004004],
    [0.00000000209, 0.03043017984, 3914.9572250346],
    [0.00000000218, 4.5320181825, 26724.8994135984],
    [0.00000000246, 3.85272742042, 4562.4609930212],
    [0.00000000254, 1.19313236635, 8432.7643848156],
    [0.00000000231, 1.70340106651, 2942.4634232916],
    [0.00000000209, 3.82345999055, 6467.9257579616],
    [0.00000000175, 3.26444055581, 3981.490034082],
    [0.0000000021, 3.55052707697, 10575.4066829418],
    [0.00000000162, 5.95176683701, 310.8407988684],
    [0.00000000165, 5.04267055142, 10177.2576795336],
    [0.00000000198, 0.80464315638, 15113.9892382152],
    [0.00000000188, 1.99007233842, 3127.3133312618],
    [0.00000000188, 4.55406803143, 12964.300703391],
    [0.00000000163, 2.14874886056, 10973.55568635],
    [0.00000000154, 4.35708331036, 3360.96774609859],
    [0.00000000169, 2.40504327781, 3355.8648978848],
    [0.00000000164, 5.5387562097, 16173.3711684044],
    [0.00000000144, 0.30186831602, 1903.4368125012],
    [0.00000000161, 3.18977924032, 6674.1113063988],
    [0.00000000135, 1.65570006128, 3325.3599555148],
    [0.00000000143, 6.25825818399, 9595.2390892234],
    [0.00000000158, 6.1425560834, 8273.8208670324],
    [0.0000000017, 5.98413937993, 3320.257107301],
    [0.00000000124, 1.74571336137, 11081.2192102886],
    [0.00000000146, 2.22851709304, 3178.1457905676],
    [0.00000000126, 5.02927593525, 3475.6775067352],
    [0.00000000123, 4.99342648375, 13760.5987102074],
    [0.00000000141, 4.5673581549, 10021.7699697966],
    [0.00000000118, 5.42945437851, 13358.9265884502],
    [0.00000000116, 4.22080571309, 5884.9268465832],
    [0.00000000119, 4.09962692144, 10021.9045904022],
    [0.00000000124, 1.79723243306, 18984.2926300096],
    [0.00000000135, 1.00085140609, 18454.601664915],
    [0.00000000106, 5.76342924005, 2288.3440435114],
    [0.00000000103, 0.63812052706, 12310.1813236108],
    [0.000000001, 4.3794694526, 9808.5381846614],
    [0.00000000104, 4.01151451052, 13916.0191096416],
    [0.00000000125, 4.94825577002, 10551.528245194],
    [0.00000000098, 5.91086068785, 14584.2982731206],
    [0.00000000126, 1.55752034021, 8270.2977486834],
    [0.00000000098, 2.5286981053, 3191.0492295652],
    [0.00000000095, 5.5080831162, 3319.8370312074],
    [0.00000000108, 1.67115668669, 11216.284290324],
    [0.0000000009, 1.71281301325, 1505.28780909299],
    [0.00000000088, 0.42472333366, 11371.7046897582],
    [0.00000000089, 4.83867235269, 16706.585251848],
    [0.00000000106, 1.78998252916, 10022.8176011676],
    [0.00000000087, 5.8960268815, 16858.4825329332],
    [0.00000000085, 0.55423657166, 13362.432453147],
    [0.00000000091, 1.61117547913, 24093.2767891752],
    [0.00000000083, 0.55328893146, 3344.2028553516],
    [0.00000000083, 1.06830368571, 3364.4908644476],
    [0.00000000084, 6.22980173043, 3369.0616141676],
    [0.00000000085, 2.58442459869, 13362.4669604514],
    [0.00000000079, 3.08636079495, 2818.035008606],
    [0.00000000077, 1.53791408869, 5459.3762870782],
    [0.00000000075, 3.34890581175, 9070.1188738488],
    [0.00000000097, 2.99973987655, 3316.733988952],
    [0.00000000084, 5.55309637085, 3427.9206312396],
    [0.00000000089, 4.16432726564, 6158.6474353058],
    [0.00000000078, 3.7237573039, 13171.0014406876],
    [0.00000000083, 0.11917380846, 3337.021998048],
    [0.00000000073, 4.91632010974, 13362.3823964964],
    [0.00000000076, 4.52961122356, 708.98980227659],
    [0.00000000071, 5.37905772348, 10264.5658840734],
    [0.00000000084, 1.93007660929, 9468.267877257],
    [0.00000000073, 5.28498987702, 4845.9002357928],
    [0.0000000008, 4.81193020727, 13149.1506113612],
    [0.00000000076, 4.77873149036, 8671.9698704406],
    [0.00000000069, 0.86312560839, 13207.029307365],
    [0.0000000007, 1.22001285505, 2274.1169495098],
    [0.0000000007, 0.53977528244, 13119.72110282519],
    [0.0000000007, 0.09801356525, 1437.1756141986],
    [0.00000000069, 2.23597403243, 7107.8230442756],
    [0.00000000074, 0.67876411085, 16460.33352952499],
    [0.00000000068, 0.5439361719, 12935.8515159232],
    [0.00000000084, 5.1161735664, 13892.1406718938],
    [0.00000000078, 5.27206373031, 853.196381752],
    [0.00000000065, 4.74504626032, 6144.4203413042],
    [0.00000000065, 2.89744951086, 7903.073419721],
    [0.00000000089, 5.44755326514, 13517.8701062334],
    [0.00000000073, 3.81554166604, 3503.079062832],
    [0.00000000066, 0.47312197978, 3980.5097130138],
    [0.00000000065, 1.38901912957, 3253.30422216],
    [0.00000000086, 5.44050231013, 6816.289933435],
    [0.00000000072, 3.44697351738, 14158.7477136156],
    [0.00000000086, 4.50213985772, 13362.517017102],
    [0.00000000074, 1.34701853675, 3361.3878221922],
    [0.00000000076, 6.0400295943, 5085.038411115],
    [0.00000000065, 0.07623776004, 5099.2655051166],
    [0.00000000066, 2.0916071729, 14421.8316369884],
    [0.00000000077, 2.75740817982, 19402.7969528166],
    [0.00000000059, 3.61679189501, 7322.1024607818],
    [0.0000000006, 4.67079289372, 10235.1363755374],
    [0.00000000064, 6.17220244155, 9381.9399937854],
    [0.00000000066, 0.35824154106, 7255.5696517344],
    [0.00000000059, 4.52818219212, 9499.2598620056],
    [0.00000000065, 1.86765892646, 11610.9101753832],
    [0.00000000074, 3.12276411101, 1107.1388056848],
    [0.0000000006, 1.35069679183, 19800.9459562248],
    [0.00000000055, 0.64581579779, 6677.6344247478],
    [0.00000000055, 0.65206957868, 7373.3824546264],
    [0.00000000055, 0.41979092764, 9779.1086761254],
    [0.00000000074, 3.8527624282, 2766.267628365],
    [0.00000000056, 2.49261586879, 5642.1982426092],
    [0.00000000055, 2.62555306434, 14314.1681130498],
    [0.00000000054, 3.95212835807, 4032.7700279266],
    [0.00000000055, 0.51062350773, 15110.4661198662],
    [0.00000000053, 5.88757767795, 21265.5231265202],
    [0.00000000051, 5.99253934388, 21947.1113727],
    [0.00000000049, 5.16723732129, 20047.1976785478],
    [0.00000000067, 1.53758821512, 9380.9596727172],
    [0.00000000057, 5.34893894346, 17101.2111369072],
    [0.00000000049, 1.9267860277, 12721.572099417],
    [0.00000000046, 2.3159032048, 10028.9508271002],
    [0.00000000052, 4.92463460288, 16304.9131300908],
    [0.0000000005, 1.69803302925, 9225.539273283],
    [0.00000000045, 2.91271003676, 8982.810669309],
    [0.00000000044, 4.38728556203, 12168.0026965746],
    [0.00000000047, 4.44933635857, 6872.6731195112],
    [0.00000000043, 2.13295656057, 22324.9050567094],
    [0.0000000005, 1.34759191325, 8439.8779318164],
    [0.00000000044, 0.89037464728, 20752.6643624754],
    [0.00000000041, 2.76164156557, 6696.4773245846],
    [0.00000000042, 4.45031185062, 10404.7338123226],
    [0.00000000044, 3.20262780268, 22743.4093795164],
    [0.00000000042, 3.54559408987, 30376.3526391666],
    [0.00000000042, 0.82118836477, 20597.2439630412],
    [0.00000000052, 4.59037852162, 22345.2603761082],
    [0.00000000042, 3.79872109079, 28628.3362260996],
    [0.00000000041, 2.3625360208, 16062.1845261168],
    [0.0000000005, 1.48377570574, 6040.3472460174],
    [0.00000000041, 5.33088551342, 765.7930644464],
    [0.00000000039, 1.57984331116, 24889.5747959916],
    [0.00000000038, 0.21571600948, 9168.6408983474],
    [0.00000000038, 3.47667842127, 1066.49547719],
    [0.00000000052, 0.81427285458, 9638.9407478762],
    [0.00000000041, 0.04356010851, 6660.8695340008],
    [0.00000000046, 0.89345529755, 16703.0448798468],
    [0.00000000044, 0.85335841824, 17468.8551979454],
    [0.00000000039, 0.27098916103, 11614.4332937322],
    [0.00000000036, 3.93388136028, 33716.9650658664],
    [0.00000000047, 3.90896957151, 5244.049239201],
    [0.00000000034, 2.37310468308, 10213.285546211],
    [0.00000000034, 4.85454495742, 14469.588512484],
    [0.00000000035, 1.96497348634, 6702.000248892],
    [0.00000000033, 2.14488758889, 13363.4300278674],
    [0.00000000046, 2.92422266239, 16703.07938715119],
    [0.00000000035, 1.78692835372, 2648.454825473],
    [0.00000000033, 4.24484480826, 8584.6616659008],
    [0.00000000043, 6.09391349922, 6660.4494579072],
    [0.00000000035, 5.72426647579, 16699.53901514999],
    [0.00000000031, 1.95254273311, 6665.9723822146],
    [0.00000000028, 5.88548900893, 19513.9835951042],
    [0.0000000003, 4.38908125588, 12295.9542296092],
    [0.00000000029, 6.25276686131, 17924.9106998204],
    [0.00000000025, 4.89000247975, 30065.5118402982],
    [0.00000000026, 2.43119321236, 6518.7582172674],
    [0.00000000028, 3.97032105354, 4407.1079038898],
    [0.00000000025, 1.88631752737, 4379.6390374902],
    [0.00000000028, 3.06196380356, 6247.5131155228],
    [0.00000000029, 5.98057498931, 6680.2445323314],
    [0.00000000032, 4.65556810177, 6701.5801727984],
    [0.00000000026, 0.76018385758, 3863.1898447936],
    [0.00000000023, 0.31107548102, 8827.3902698748],
    [0.00000000022, 1.11553014451, 6684.8152820514],
    [0.0000000002, 4.81193192299, 15508.6151232744],
    [0.00000000019, 5.11656455993, 12012.5822971404],
    [0.00000000026, 1.07254469525, 8425.6508378148],
    [0.00000000021, 2.68436255141, 6261.7402095244],
    [0.00000000022, 2.15631095909, 3335.0895023924],
    [0.00000000017, 0.03684125273, 3877.4169387952],
    [0.00000000017, 2.84467149903, 3344.4937620578],
    [0.0000000002, 5.41519706836, 3205.5473466644],
];

const L3: &[Term] = &[
    [0.00001482423, 0.44434694876, 3340.6124266998],
    [0.00000662095, 0.88469178686, 6681.2248533996],
    [0.00000188268, 1.28799982497, 10021.8372800994],
    [0.00000041474, 1.64850786997, 13362.4497067992],
    [0.00000022661, 2.05267665262, 155.4203994342],
    [0.00000025994, 0.0, 0.0],
    [0.00000008024, 1.99858757687, 16703.062133499],
    [0.00000010454, 1.58006906385, 3.523118349],
    [0.000000049, 2.82452457966, 242.728603974],
    [0.00000003782, 2.01914272515, 3344.1355450488],
    [0.00000003176, 4.59144897927, 3185.1920272656],
    [0.00000003134, 0.65044714325, 553.5694028424],
    [0.00000001684, 5.53835848782, 951.7184062506],
    [0.00000001511, 5.71795850828, 191.4482661116],
    [0.00000001448, 0.45869142895, 796.2980068164],
    [0.00000001442, 2.34368495577, 20043.6745601988],
    [0.00000001302, 5.36284013048, 0.9803210682],
    [0.00000001169, 4.14601161433, 1349.8674096588],
    [0.00000001133, 2.38180830662, 6684.7479717486],
    [0.00000001037, 1.76892750558, 382.8965322232],
    [0.00000000894, 5.33688328934, 1194.4470102246],
    [0.00000000807, 2.74798886181, 1748.016413067],
    [0.0000000064, 6.10665147849, 3496.032826134],
    [0.00000000558, 1.8521234236, 398.1490034082],
    [0.00000000567, 5.85922384979, 7.1135470008],
    [0.00000000647, 3.17645475605, 3583.3410306738],
    [0.00000000452, 5.98109989317, 2787.0430238574],
    [0.00000000508, 1.01139298015, 3149.1641605882],
    [0.00000000519, 4.93376176788, 6525.8044539654],
    [0.00000000405, 1.27295444059, 2281.2304965106],
    [0.00000000399, 2.32888685659, 3738.761430108],
    [0.00000000472, 0.84411483892, 4136.9104335162],
    [0.00000000333, 5.42704539231, 1059.3819301892],
    [0.00000000313, 3.70599897858, 3097.88382272579],
    [0.00000000281, 5.74581724084, 3341.592747768],
    [0.00000000287, 2.69304799864, 10025.3603984484],
    [0.00000000237, 5.68519881994, 4535.0594369244],
    [0.00000000215, 2.49494803822, 1990.745017041],
    [0.0000000026, 2.67996877129, 23384.2869868986],
    [0.00000000269, 1.10390153866, 2388.8940204492],
    [0.00000000186, 4.86408411823, 2957.7158944766],
    [0.00000000176, 3.86618588087, 1592.5960136328],
    [0.00000000177, 0.85374318134, 3894.1818295422],
    [0.00000000191, 4.58805692093, 3337.0893083508],
    [0.00000000185, 5.8089931655, 4399.994356889],
    [0.00000000143, 1.15592612974, 7477.522860216],
    [0.00000000173, 2.70622920014, 7079.3738568078],
    [0.00000000146, 1.37569151302, 6489.776587288],
    [0.00000000121, 3.24333934982, 9492.1463150048],
    [0.00000000116, 5.7163981953, 12303.06777661],
    [0.00000000111, 2.69566947038, 6151.533888305],
    [0.00000000103, 3.53587741373, 6923.9534573736],
    [0.00000000097, 5.23712981002, 8962.4553499102],
    [0.00000000089, 0.0595132422, 6127.6554505572],
    [0.00000000093, 5.29818155587, 9866.4168806652],
    [0.00000000084, 5.68544044325, 4292.3308329504],
    [0.00000000091, 6.16223680965, 6682.2051744678],
    [0.00000000081, 4.3272333062, 4933.2084403326],
    [0.00000000077, 5.6318982417, 1589.0728952838],
    [0.00000000102, 6.26937663026, 3347.7259737006],
    [0.00000000076, 3.05724276091, 13365.9728251482],
    [0.00000000063, 3.12770931753, 10419.9862835076],
    [0.00000000062, 1.45647168723, 7234.794256242],
    [0.00000000069, 4.82266605869, 6677.7017350506],
    [0.00000000064, 1.73713448446, 3870.3033917944],
    [0.00000000058, 4.85723088492, 5486.777843175],
    [0.00000000058, 6.0984951679, 7875.6718636242],
    [0.00000000063, 4.14716431158, 3340.5951730476],
    [0.00000000065, 6.17932665318, 3340.629680352],
    [0.00000000057, 1.48905992502, 5729.506447149],
    [0.0000000006, 6.08710604997, 7740.6067835888],
    [0.00000000056, 1.96253427165, 3553.9115221378],
    [0.00000000059, 0.89874385953, 3339.6321056316],
    [0.00000000053, 3.04776975379, 26724.8994135984],
    [0.00000000061, 3.63390789623, 12832.7587417046],
    [0.00000000059, 0.2298974604, 6681.2421070518],
    [0.00000000053, 3.97996929188, 5092.1519581158],
    [0.00000000059, 4.48255178273, 6681.2075997474],
    [0.00000000045, 3.88055745121, 10264.5658840734],
    [0.00000000058, 4.85371375265, 5621.8429232104],
    [0.00000000049, 4.03623343126, 16173.3711684044],
    [0.00000000061, 2.90942510134, 5331.3574437408],
    [0.00000000043, 1.8099071834, 9830.3890139878],
    [0.00000000044, 4.10828944542, 4690.4798363586],
    [0.00000000044, 3.49332765553, 13760.5987102074],
    [0.00000000048, 1.81207342615, 3723.508958923],
    [0.00000000041, 1.59906754314, 10818.1352869158],
    [0.00000000041, 2.05797417369, 6681.2921637024],
    [0.00000000038, 3.38619280993, 16706.585251848],
    [0.00000000041, 2.53336616026, 6681.1575430968],
    [0.00000000041, 1.79026132252, 3340.545116397],
    [0.0000000005, 4.7032478409, 8273.8208670324],
    [0.00000000037, 3.37898394417, 30065.5118402982],
    [0.00000000039, 2.65566008587, 6894.5239488376],
    [0.00000000035, 2.58475025674, 9623.6882766912],
    [0.00000000037, 6.07442797404, 4929.6853219836],
    [0.00000000042, 3.04642561189, 12964.300703391],
    [0.00000000037, 5.23784488646, 6298.3283211764],
    [0.00000000043, 6.17835198533, 15643.6802033098],
    [0.00000000034, 2.44806511268, 7210.9158184942],
    [0.00000000038, 0.26295105909, 10022.8176011676],
    [0.00000000028, 0.74281728305, 10021.8545337516],
    [0.00000000028, 4.99536302577, 10021.8200264472],
    [0.00000000034, 5.04118058624, 8969.568896911],
    [0.00000000025, 2.59849002421, 8955.3418029094],
    [0.0000000003, 1.14354290938, 2146.1654164752],
    [0.00000000027, 0.26980783576, 18984.2926300096],
    [0.00000000025, 0.39810308575, 6688.3384004004],
    [0.00000000024, 5.64558695441, 13207.029307365],
    [0.00000000027, 6.24398988438, 5088.6288397668],
    [0.00000000024, 0.25455613132, 11081.2192102886],
    [0.00000000023, 0.53673547304, 3333.498879699],
    [0.00000000024, 1.80155161992, 6674.1113063988],
    [0.00000000029, 4.3995350792, 10018.3141617504],
    [0.00000000023, 2.91040060956, 10551.528245194],
    [0.00000000022, 1.20895727897, 529.6909650946],
    [0.00000000026, 0.08254324904, 7632.9432596502],
    [0.00000000026, 1.81668969835, 6283.0758499914],
    [0.00000000021, 0.67232850824, 6836.6452528338],
    [0.00000000017, 5.19518401928, 2914.0142358238],
    [0.00000000017, 5.16488977775, 8031.0922630584],
    [0.00000000021, 3.62973082412, 5884.9268465832],
    [0.00000000018, 5.06870872024, 2544.3144198834],
    [0.00000000014, 2.50522181917, 7064.1213856228],
    [0.00000000017, 0.4183559895, 9468.267877257],
    [0.00000000011, 2.21363101654, 6438.4962494256],
    [0.00000000013, 1.38424462832, 3340.6797370026],
    [0.00000000012, 3.28248484262, 8671.9698704406],
    [0.00000000014, 0.23027665815, 3767.2106175758],
];

const L4: &[Term] = &[
    [0.00000113969, PI, 0.0],
    [0.00000028725, 5.63662412043, 6681.2248533996],
    [0.00000024447, 5.13868481454, 3340.6124266998],
    [0.00000011187, 6.03161074431, 10021.8372800994],
    [0.0000000319, 3.56267988299, 155.4203994342],
    [0.00000003252, 0.13228350651, 13362.4497067992],
    [0.00000000787, 0.49340783377, 16703.062133499],
    [0.00000000776, 1.31734531594, 242.728603974],
    [0.00000000494, 3.06356214498, 3185.1920272656],
    [0.00000000374, 2.15785846355, 553.5694028424],
    [0.00000000331, 6.23159792887, 3.523118349],
    [0.00000000197, 0.44350153983, 3344.1355450488],
    [0.00000000181, 0.81531283571, 20043.6745601988],
    [0.00000000168, 3.73509781785, 3496.032826134],
    [0.00000000086, 0.79259553758, 6684.7479717486],
    [0.00000000115, 1.66898531261, 3583.3410306738],
    [0.00000000092, 3.40530361815, 6525.8044539654],
    [0.00000000064, 4.47443580658, 2787.0430238574],
    [0.00000000045, 5.17216217058, 3097.88382272579],
    [0.00000000041, 1.21875027733, 23384.2869868986],
    [0.00000000036, 5.53975653407, 3149.1641605882],
    [0.00000000039, 5.40966345885, 4136.9104335162],
    [0.00000000028, 4.85378781404, 6127.6554505572],
    [0.00000000027, 0.42811091036, 3738.761430108],
    [0.00000000032, 1.22337093927, 10025.3603984484],
    [0.00000000025, 1.56348878811, 26724.8994135984],
    [0.00000000029, 2.40178626971, 3894.1818295422],
    [0.00000000023, 4.16371253947, 3341.592747768],
    [0.00000000022, 5.98429191667, 7477.522860216],
    [0.00000000019, 2.03228980685, 6923.9534573736],
    [0.0000000002, 3.79275573433, 9866.4168806652],
    [0.00000000021, 4.27532111122, 6836.6452528338],
    [0.00000000015, 1.56315497374, 13365.9728251482],
    [0.00000000011, 1.33261955275, 2281.2304965106],
    [0.00000000009, 6.15390464542, 6489.776587288],
    [0.00000000007, 4.23894194106, 4535.0594369244],
];

const L5: &[Term] = &[
    [0.0000000071, 4.04089996521, 6681.2248533996],
    [0.00000000868, PI, 0.0],
    [0.0000000051, 4.49214901625, 10021.8372800994],
    [0.00000000357, 5.07435505061, 155.4203994342],
    [0.00000000223, 3.51351884241, 3340.6124266998],
    [0.00000000199, 4.85313666795, 13362.4497067992],
    [0.000000001, 6.09089356066, 242.728603974],
    [0.00000000069, 5.19017483537, 16703.062133499],
    [0.00000000064, 1.55783055571, 3185.1920272656],
    [0.00000000035, 3.68246171643, 553.5694028424],
    [0.00000000025, 5.22079788019, 3496.032826134],
    [0.00000000024, 0.17861991485, 3583.3410306738],
    [0.00000000019, 5.5918471446, 20043.6745601988],
    [0.00000000014, 5.95565787085, 23384.2869868986],
    [0.00000000012, 1.93859256739, 6525.8044539654],
];

const B0: &[Term] = &[
    [0.03197134986, 3.76832042432, 3340.6124266998],
    [0.00298033234, 4.10616996243, 6681.2248533996],
    [0.00289104742, 0.0, 0.0],
    [0.00031365538, 4.44651052853, 10021.8372800994],
    [0.000034841, 4.78812547889, 13362.4497067992],
    [0.00000442999, 5.65233015876, 3337.0893083508],
    [0.00000443401, 5.02642620491, 3344.1355450488],
    [0.00000399109, 5.130568147, 16703.062133499],
    [0.00000292506, 3.79290644595, 2281.2304965106],
    [0.00000181982, 6.13648011704, 6151.533888305],
    [0.00000163159, 4.26399626634, 529.6909650946],
    [0.00000159678, 2.23194610246, 1059.3819301892],
    [0.00000139323, 2.41796344238, 8962.4553499102],
    [0.00000149297, 2.16501209917, 5621.8429232104],
    [0.00000142686, 1.1821501611, 3340.5951730476],
    [0.00000142685, 3.2129218082, 3340.629680352],
    [0.00000082544, 5.36667872319, 6684.7479717486],
    [0.0000007364, 5.09187524843, 398.1490034082],
    [0.0000007266, 5.53775710437, 6283.0758499914],
    [0.00000086377, 5.74429648412, 3738.761430108],
    [0.00000083276, 5.98866315739, 6677.7017350506],
    [0.00000060116, 3.67960808826, 796.2980068164],
    [0.00000063111, 0.73049113369, 5884.9268465832],
    [0.00000062338, 4.85071999184, 2942.4634232916],
    [0.00000046951, 5.54339723804, 3340.545116397],
    [0.00000046953, 5.13486627234, 3340.6797370026],
    [0.0000004663, 5.47361665459, 20043.6745601988],
    [0.00000045588, 2.13262507507, 2810.9214616052],
    [0.00000041269, 0.20003189001, 9492.1463150048],
    [0.00000047199, 4.52184736343, 3149.1641605882],
    [0.0000003854, 4.08008443274, 4136.9104335162],
    [0.00000033069, 4.06581918329, 1751.539531416],
    [0.00000029694, 5.92218297386, 3532.0606928114],
    [0.00000032736, 2.62071056958, 2914.0142358238],
    [0.00000029521, 2.75342566734, 12303.06777661],
    [0.00000028169, 2.06282533993, 5486.777843175],
    [0.00000028618, 4.94710527914, 3870.3033917944],
    [0.00000026603, 3.5508584402, 6681.2421070518],
    [0.00000026603, 1.52008675291, 6681.2075997474],
    [0.00000023336, 2.27624532707, 1589.0728952838],
    [0.00000026052, 2.60064548916, 4399.994356889],
    [0.00000022637, 2.27507466406, 1194.4470102246],
    [0.00000018887, 6.04416196149, 7079.3738568078],
    [0.00000014846, 3.41358603159, 5088.6288397668],
    [0.00000019947, 2.67365368471, 8432.7643848156],
    [0.00000014682, 5.89211938785, 9623.6882766912],
    [0.00000014152, 2.42512744356, 3333.498879699],
    [0.0000001331, 2.62839773036, 426.598190876],
    [0.00000014008, 1.67425558329, 6254.6266625236],
    [0.00000015104, 2.81013535571, 3496.032826134],
    [0.00000013011, 5.70759434129, 10025.3603984484],
    [0.0000001208, 1.51804981987, 3185.1920272656],
    [0.00000013183, 0.04521207632, 10018.3141617504],
    [0.00000011554, 5.5741897182, 191.4482661116],
    [0.00000011196, 0.55829576311, 5092.1519581158],
    [0.0000001153, 2.13314819584, 11773.3768115154],
    [0.00000010435, 5.72414012635, 6467.9257579616],
    [0.00000009846, 0.86942245495, 1592.5960136328],
    [0.00000009761, 1.0934228866, 2544.3144198834],
    [0.00000008754, 5.47281660412, 6681.2921637024],
    [0.00000008937, 4.8379038561, 6489.776587288],
    [0.00000008652, 4.72118876809, 213.299095438],
    [0.00000008797, 2.86597575792, 3341.592747768],
    [0.00000008384, 2.65895230037, 4535.0594369244],
    [0.00000008213, 4.8260813471, 3553.9115221378],
    [0.00000008799, 1.52910882795, 3339.6321056316],
    [0.00000008103, 1.00994045172, 9225.539273283],
    [0.00000008754, 5.88131160438, 6681.1575430968],
    [0.00000007209, 4.41679446871, 7477.522860216],
    [0.0000000856, 4.79003986337, 4690.4798363586],
    [0.00000006087, 1.89071507516, 9595.2390892234],
    [0.00000006974, 0.53246284561, 12832.7587417046],
    [0.00000005584, 6.18909308524, 4292.3308329504],
    [0.00000005038, 6.06393121994, 7210.9158184942],
    [0.00000005126, 0.11856805, 4562.4609930212],
    [0.00000004863, 1.33051301524, 3894.1818295422],
    [0.00000005592, 3.97792577165, 3127.3133312618],
    [0.00000004965, 5.74589127183, 1990.745017041],
    [0.0000000553, 5.81711987294, 23384.2869868986],
    [0.00000004184, 3.88899446923, 10021.8545337516],
    [0.00000004184, 1.8582188554, 10021.8200264472],
    [0.00000004685, 1.11750235736, 3319.8370312074],
    [0.00000003954, 2.65573703692, 4929.6853219836],
    [0.00000005174, 3.62343554596, 2700.7151403858],
    [0.00000004639, 6.14089337232, 7.1135470008],
    [0.00000004686, 3.27731664264, 3361.3878221922],
    [0.00000004999, 3.09121636067, 15643.6802033098],
    [0.00000003919, 2.96552252075, 7740.6067835888],
    [0.00000003361, 1.85016770821, 2957.7158944766],
    [0.00000004246, 4.1963927863, 2146.1654164752],
    [0.00000004101, 6.22532797325, 10213.285546211],
    [0.00000003124, 0.08536218671, 10419.9862835076],
    [0.00000003079, 2.41163389513, 3344.2028553516],
    [0.00000003093, 1.98041729732, 3337.021998048],
    [0.00000003044, 4.38894419912, 1221.8485663214],
    [0.00000002879, 2.93292197885, 2787.0430238574],
    [0.00000003372, 4.45558202843, 6674.1113063988],
    [0.0000000251, 4.06249795775, 6872.6731195112],
    [0.00000002616, 1.23659420897, 4933.2084403326],
    [0.00000003011, 4.33965766608, 2388.8940204492],
    [0.00000003094, 2.40385309455, 2118.7638603784],
    [0.00000002516, 2.30275910483, 3723.508958923],
    [0.00000002192, 1.688775987, 639.897286314],
    [0.00000002157, 6.07600403318, 9808.5381846614],
    [0.00000002686, 2.38172448359, 15113.9892382152],
    [0.00000002156, 2.87771528495, 6041.3275670856],
    [0.00000002495, 3.87395320804, 7903.073419721],
    [0.00000002253, 0.47469626036, 3475.6775067352],
    [0.00000002443, 3.02632351975, 3767.2106175758],
    [0.00000001937, 0.38000997629, 13358.9265884502],
    [0.00000002213, 3.9198232636, 3205.5473466644],
    [0.00000002385, 6.23883456815, 12964.300703391],
    [0.00000001806, 2.38408432339, 11243.6858464208],
    [0.00000002265, 1.8577388518, 6525.8044539654],
    [0.00000001642, 1.86812936557, 6680.2445323314],
    [0.00000001616, 3.39954231101, 8429.2412664666],
    [0.00000001646, 0.73261192032, 2274.1169495098],
    [0.0000000191, 6.04319894051, 13365.9728251482],
    [0.00000001492, 2.9936092905, 7875.6718636242],
    [0.00000001567, 1.76860259924, 382.8965322232],
    [0.00000001459, 1.40571286543, 14584.2982731206],
    [0.00000001527, 5.79343536555, 6894.5239488376],
    [0.00000001409, 5.17099876287, 9830.3890139878],
    [0.00000001665, 3.60183854165, 2288.3440435114],
    [0.00000001616, 2.1944777548, 8827.3902698748],
    [0.00000001746, 0.10485504333, 3583.3410306738],
    [0.00000001637, 3.20410489018, 6682.2051744678],
    [0.00000001269, 2.02253791623, 155.4203994342],
    [0.00000001507, 5.80795976424, 1748.016413067],
    [0.00000001296, 2.92899986522, 9381.9399937854],
    [0.00000001291, 2.98932404463, 6836.6452528338],
    [0.00000001377, 5.8098082145, 10021.9045904022],
    [0.00000001357, 0.32856318286, 4032.7700279266],
    [0.00000001377, 6.21830533138, 10021.7699697966],
    [0.00000001227, 2.20421067322, 12935.8515159232],
    [0.0000000108, 4.75502761725, 10818.1352869158],
    [0.00000001016, 1.33950348904, 12566.1516999828],
    [0.00000001083, 0.87622049125, 16173.3711684044],
    [0.00000000957, 5.29505019432, 1066.49547719],
    [0.00000001035, 2.44286811558, 1052.2683831884],
    [0.00000001153, 4.73786864168, 8031.0922630584],
    [0.00000001042, 1.73541825729, 3369.0616141676],
    [0.00000000899, 1.87265511538, 3077.528503327],
    [0.00000000892, 2.51347636401, 3603.6963500726],
    [0.00000000904, 0.27361540197, 3325.3599555148],
    [0.00000000883, 5.4653793674, 5614.7293762096],
    [0.00000000949, 0.04595688771, 7064.1213856228],
    [0.00000000872, 3.61205859852, 6702.000248892],
    [0.00000000842, 5.61713543212, 8955.3418029094],
    [0.00000000842, 0.57536275896, 3191.0492295652],
    [0.00000000904, 4.11832249537, 3355.8648978848],
    [0.00000001044, 2.6588954211, 3312.163239232],
    [0.00000000807, 2.2644325982, 8969.568896911],
    [0.00000001046, 6.11317298058, 5331.3574437408],
    [0.00000000933, 0.82551054416, 3503.079062832],
    [0.00000000946, 1.92368414869, 5628.9564702112],
    [0.00000000978, 4.55697167317, 3097.88382272579],
    [0.00000000846, 4.65096242323, 6438.4962494256],
    [0.00000000901, 1.46788821922, 6660.4494579072],
    [0.00000000739, 4.97716008834, 10014.7237330986],
    [0.00000000762, 3.42576079312, 18984.2926300096],
    [0.00000000934, 0.35014113954, 3264.3463554242],
    [0.00000000894, 0.34991139502, 10551.528245194],
    [0.00000000665, 6.05561837558, 7632.9432596502],
    [0.00000000605, 4.68480399923, 5729.506447149],
    [0.00000000593, 2.97207045977, 3178.1457905676],
    [0.00000000617, 2.19529512598, 13362.432453147],
    [0.00000000579, 3.32303439858, 11081.2192102886],
    [0.00000000579, 2.31217959727, 6677.6344247478],
    [0.00000000572, 4.27984088783, 6546.1597733642],
    [0.00000000584, 4.51625727923, 1648.4467571974],
    [0.00000000626, 4.60715188203, 2487.4160449478],
    [0.00000000649, 2.17894376907, 6298.3283211764],
    [0.00000000617, 4.22635718375, 13362.4669604514],
    [0.0000000055, 3.11161314141, 6144.4203413042],
    [0.00000000551, 3.27081871281, 6127.6554505572],
    [0.00000000536, 0.18973312148, 3346.1353510072],
    [0.00000000557, 6.13686769377, 26724.8994135984],
    [0.00000000571, 5.6534146366, 2921.1277828246],
    [0.00000000552, 5.75724124958, 149.5631971346],
    [0.00000000638, 4.49647258906, 3.523118349],
    [0.00000000552, 1.07795672495, 536.8045120954],
    [0.00000000537, 4.19207200801, 3335.0895023924],
    [0.00000000567, 2.62806466971, 2648.454825473],
    [0.00000000641, 3.24534699403, 3347.7259737006],
    [0.00000000546, 2.76744357149, 5459.3762870782],
    [0.00000000556, 4.98610303145, 6531.661656265],
    [0.00000000578, 2.74445077242, 6684.8152820514],
    [0.00000000613, 3.01718810256, 8270.2977486834],
    [0.00000000558, 5.89236366633, 6158.6474353058],
    [0.00000000489, 4.59082197201, 522.5774180938],
    [0.00000000445, 3.64293918046, 10713.9948813262],
    [0.00000000539, 0.59284523316, 553.5694028424],
    [0.00000000434, 1.99641894213, 26087.9031415742],
    [0.00000000459, 4.84216944554, 1758.6530784168],
    [0.00000000423, 3.77854586358, 6688.3384004004],
    [0.00000000421, 3.10245838137, 8329.671610597],
    [0.00000000421, 4.43540354818, 103.0927742186],
    [0.00000000502, 3.0314151263, 3360.96774609859],
    [0.00000000422, 5.99158563064, 242.728603974],
    [0.00000000401, 2.06012045711, 3980.5097130138],
    [0.0000000041, 5.85255605682, 3351.2490920496],
    [0.00000000375, 2.5080334092, 6784.3176276182],
    [0.00000000407, 0.3011732839, 16304.9131300908],
    [0.00000000507, 1.350164178, 3320.257107301],
    [0.00000000385, 1.06248122739, 7234.794256242],
    [0.00000000519, 4.61705823333, 7373.3824546264],
    [0.00000000401, 0.51161484292, 17085.9586657222],
    [0.00000000371, 0.41707432281, 13760.5987102074],
    [0.00000000476, 0.81142637639, 6816.289933435],
    [0.00000000348, 3.36497054127, 8439.8779318164],
    [0.00000000366, 6.05186692577, 3607.2194684216],
    [0.00000000402, 2.67375675473, 18454.601664915],
    [0.00000000439, 0.41122589061, 10404.7338123226],
    [0.00000000412, 4.81039654306, 3329.97576135],
    [0.00000000413, 0.21011211689, 13149.1506113612],
    [0.00000000363, 2.19017574725, 9866.4168806652],
    [0.00000000337, 5.46398740226, 6604.958782124],
    [0.0000000034, 1.7339266228, 1692.1656695024],
    [0.00000000344, 3.58310197017, 7107.8230442756],
    [0.0000000042, 2.77274750272, 2906.900688823],
    [0.00000000335, 2.02339633221, 3333.5661900018],
    [0.00000000336, 2.78173647754, 4989.0591838972],
    [0.00000000354, 5.41265456299, 951.7184062506],
    [0.00000000328, 0.43464916253, 6923.9534573736],
    [0.00000000422, 1.5759173708, 8273.8208670324],
    [0.00000000324, 4.99165215532, 11371.7046897582],
    [0.00000000351, 4.60766539695, 3074.005384978],
    [0.00000000333, 4.86991808664, 3863.1898447936],
    [0.00000000319, 1.44510282827, 11769.8536931664],
    [0.00000000296, 5.25637576704, 76.2660712756],
    [0.00000000349, 1.62483962938, 17924.9106998204],
    [0.00000000293, 2.20643287367, 3347.6586633978],
    [0.00000000315, 4.5522730677, 5828.0284716476],
    [0.0000000028, 1.4213429154, 6606.4432548323],
    [0.00000000336, 1.56854533505, 1581.959348283],
    [0.00000000343, 0.27605726543, 10973.55568635],
    [0.00000000271, 0.08314924409, 10235.1363755374],
    [0.0000000028, 0.76436434398, 853.196381752],
    [0.00000000317, 4.91466081381, 3443.7052009184],
    [0.00000000257, 0.15709629188, 12168.0026965746],
    [0.00000000237, 3.13380421805, 74.7815985673],
    [0.00000000271, 1.83008759256, 3399.9862886134],
    [0.00000000233, 3.20163702613, 10177.2576795336],
    [0.00000000312, 0.28436027987, 13745.3462390224],
    [0.00000000273, 4.53535816659, 3344.4937620578],
    [0.00000000235, 0.67980074869, 17395.2197347258],
    [0.00000000262, 3.84436620806, 9168.6408983474],
    [0.00000000271, 4.94509131052, 692.1576012268],
    [0.00000000254, 2.19491751584, 3281.2385647862],
    [0.0000000022, 1.65400798925, 3546.797975137],
    [0.00000000283, 5.57884389098, 3973.396166013],
    [0.00000000229, 5.93153003758, 3364.4908644476],
    [0.00000000223, 4.82744958322, 9779.1086761254],
    [0.00000000222, 0.71788606092, 16699.53901514999],
    [0.00000000219, 0.09831940529, 16706.585251848],
    [0.00000000221, 1.66596576205, 10575.4066829418],
    [0.00000000259, 1.10208840059, 1744.4259844152],
    [0.00000000243, 1.52425310144, 14054.607308026],
    [0.00000000273, 6.12932898811, 3336.7310913418],
    [0.00000000232, 4.73422268172, 3316.733988952],
    [0.0000000021, 5.97305256642, 419.4846438752],
    [0.00000000213, 5.35378111313, 1596.1864422846],
    [0.00000000197, 3.32400761027, 5085.038411115],
    [0.00000000193, 0.90522037315, 14314.1681130498],
    [0.00000000192, 2.63243342989, 433.7117378768],
    [0.00000000188, 1.14983778034, 13892.1406718938],
    [0.000000002, 4.79567916236, 6261.7402095244],
    [0.00000000204, 2.3227216771, 13916.0191096416],
    [0.00000000191, 5.08454560792, 2178.137722292],
    [0.00000000191, 5.88821293073, 3340.19235060619],
    [0.00000000236, 0.97341490472, 3230.4061054804],
    [0.000000002, 3.60041329896, 3304.5845600224],
    [0.00000000165, 2.91701234796, 3415.3940252671],
    [0.00000000191, 4.7764733812, 3341.0325027934],
    [0.00000000174, 2.20549134205, 10020.8569590312],
    [0.00000000161, 2.64795288862, 3304.0070613956],
    [0.00000000173, 3.54115285115, 10022.8176011676],
    [0.00000000154, 2.45916882835, 12722.5524204852],
    [0.0000000016, 1.73968020026, 3377.217792004],
    [0.00000000196, 0.78013533938, 3376.6402933772],
    [0.00000000153, 0.27328628499, 13362.3823964964],
    [0.0000000019, 2.65143864216, 3657.0042963564],
    [0.00000000172, 5.71092117488, 2384.3232707292],
    [0.00000000157, 1.00235389487, 3209.0704650134],
    [0.0000000015, 3.39592748537, 3472.1543883862],
    [0.00000000165, 5.86551673354, 2803.8079146044],
    [0.00000000154, 0.32136196834, 6665.9723822146],
    [0.00000000178, 3.34059693754, 11216.284290324],
    [0.00000000192, 0.66079944629, 3134.4268782626],
    [0.00000000161, 2.87915391245, 4392.8808098882],
    [0.00000000159, 3.72249746113, 13517.8701062334],
    [0.00000000168, 0.55746622745, 110.2063212194],
    [0.00000000158, 5.67248197213, 4407.1079038898],
    [0.00000000161, 1.76789928464, 6709.6740408674],
    [0.00000000158, 5.50643845256, 13171.0014406876],
    [0.00000000129, 1.21297315367, 19513.9835951042],
    [0.00000000173, 0.17070148373, 3024.2205570432],
    [0.00000000132, 4.25407099272, 16858.4825329332],
    [0.00000000125, 2.88510294667, 17256.6315363414],
    [0.00000000124, 2.59724598646, 12310.1813236108],
    [0.0000000017, 4.05945259741, 2818.035008606],
    [0.00000000121, 5.23997785185, 9872.2740829648],
    [0.00000000142, 3.02798835989, 3511.285297319],
    [0.00000000165, 2.53171951288, 16276.463942623],
    [0.00000000153, 6.14783670557, 13362.517017102],
    [0.00000000119, 4.15694365082, 3760.097070575],
    [0.0000000012, 0.64287725481, 4459.3682188026],
    [0.0000000013, 4.9500230946, 13553.8979729108],
    [0.0000000012, 0.17087854222, 8671.9698704406],
    [0.00000000112, 0.16822264326, 135.0650800354],
    [0.00000000137, 3.34809361979, 3341.0423098265],
    [0.00000000125, 1.32195559043, 1349.8674096588],
    [0.00000000111, 3.14151030451, 13524.9163429314],
    [0.00000000119, 5.9536134805, 12295.9542296092],
    [0.00000000131, 5.09769375731, 14158.7477136156],
    [0.00000000141, 1.37128440708, 3169.9395560806],
    [0.00000000112, 3.35831868034, 5989.0672521728],
    [0.00000000104, 5.00696041032, 13119.72110282519],
    [0.0000000011, 5.23317664736, 1375.7737998458],
    [0.00000000105, 2.72692368303, 1162.4747044078],
    [0.00000000104, 1.73769165705, 2221.856634597],
    [0.00000000137, 1.0457695039, 3340.1825435731],
    [0.00000000106, 6.13415161313, 162.4666361322],
    [0.00000000119, 2.63312561442, 7321.1221397136],
    [0.00000000105, 3.09551802365, 20618.0193585336],
    [0.00000000099, 4.25515697974, 23539.7073863328],
    [0.00000000108, 1.01854506729, 3265.8308281325],
    [0.00000000119, 4.07277528003, 10184.3039162316],
    [0.00000000096, 1.81122023425, 10001.061884607],
    [0.00000000093, 3.58905885066, 5099.2655051166],
    [0.00000000095, 4.94756054764, 3981.490034082],
    [0.00000000094, 5.3749336802, 13355.3361597984],
    [0.00000000095, 0.13037485775, 15508.6151232744],
    [0.00000000103, 0.43484130196, 1861.7458526354],
    [0.0000000009, 3.76370412628, 22324.9050567094],
    [0.00000000091, 3.95041101283, 10042.6126755918],
    [0.00000000106, 4.30186500383, 640.8776073822],
    [0.00000000109, 6.18873749839, 1478.8665740644],
    [0.00000000088, 1.79608901332, 6247.5131155228],
    [0.00000000102, 5.58754073056, 2766.267628365],
    [0.0000000011, 0.94707767481, 3274.1250177854],
    [0.00000000084, 4.45487801845, 6696.4773245846],
    [0.00000000085, 2.74791518135, 3407.0998356142],
    [0.00000000087, 4.51145821088, 220.4126424388],
    [0.00000000101, 5.94930983227, 8425.6508378148],
    [0.00000000082, 0.01837230371, 9499.2598620056],
    [0.0000000008, 0.4255098998, 18052.9295431578],
    [0.00000000083, 2.96589752213, 6652.7756659318],
    [0.0000000008, 4.61446168762, 3914.9572250346],
    [0.00000000079, 1.50228636499, 2111.6503133776],
    [0.00000000089, 3.52977975496, 9485.032768004],
    [0.00000000086, 0.41976545794, 956.2891559706],
    [0.00000000088, 5.46013317934, 16460.33352952499],
    [0.00000000091, 2.09965252231, 949.1756089698],
    [0.00000000104, 1.72206104768, 3296.8935143948],
    [0.00000000103, 1.25691413032, 3384.3313390048],
    [0.00000000084, 5.78647729498, 5518.7501489918],
    [0.00000000079, 1.79313426804, 38.1330356378],
    [0.00000000073, 0.10667695992, 29822.7832363242],
    [0.00000000087, 2.11654357529, 3450.8187479192],
    [0.00000000072, 3.89476829327, 9380.9596727172],
    [0.00000000075, 2.5934030534, 1964.838626854],
    [0.00000000098, 4.01577665825, 6843.6914895318],
    [0.00000000074, 5.32032289064, 11766.2632645146],
    [0.00000000068, 0.04775525953, 2125.8774073792],
    [0.00000000069, 6.07427052412, 26482.1708096244],
    [0.00000000069, 2.050189992, 29424.634232916],
    [0.00000000084, 0.16960920719, 263.0839233728],
    [0.00000000068, 5.03013252197, 9070.1188738488],
    [0.00000000076, 2.00296087293, 224.3447957019],
    [0.00000000078, 2.17362706851, 30220.9322397324],
    [0.00000000066, 3.85497672006, 19406.6782881746],
    [0.00000000066, 5.70059718737, 33561.5446664322],
    [0.00000000067, 0.16600936321, 22743.4093795164],
    [0.00000000065, 4.65423392949, 2807.3983432562],
    [0.00000000069, 3.34387224268, 11670.2840372968],
    [0.00000000087, 4.9783802188, 1118.7557921028],
    [0.00000000063, 0.1890710618, 30065.5118402982],
    [0.00000000064, 4.61909647015, 9886.772200064],
    [0.00000000073, 0.93706647938, 20735.83216142559],
    [0.0000000006, 5.83757395809, 8646.0634802536],
    [0.00000000062, 4.81389895867, 20199.094959633],
    [0.00000000059, 5.00150762621, 6414.6178116778],
    [0.00000000068, 3.84252763135, 6571.0185321802],
    [0.00000000062, 2.81689634717, 6944.3087767724],
    [0.00000000065, 4.49078808776, 632.7837393132],
    [0.00000000058, 5.64889513615, 9945.5712088238],
    [0.0000000007, 2.51605694403, 9638.9407478762],
    [0.00000000057, 3.28105791201, 206.1855484372],
    [0.00000000057, 2.97448265957, 21795.21409161479],
    [0.00000000056, 2.23565630779, 20995.3929664494],
    [0.00000000057, 1.88614831237, 18451.07854656599],
    [0.00000000071, 4.82445647307, 8542.970706035],
    [0.00000000061, 3.659450739, 14421.8316369884],
    [0.00000000056, 3.13789031275, 8799.988713778],
    [0.00000000057, 4.89927831599, 9602.3526362242],
    [0.00000000065, 3.37109873211, 11610.9101753832],
    [0.00000000067, 1.92945007459, 21265.5231265202],
    [0.00000000055, 1.95164531764, 9588.1255422226],
    [0.00000000057, 2.82240075154, 10124.930054318],
    [0.00000000057, 6.10407356832, 19800.9459562248],
    [0.00000000055, 5.20976473824, 3237.5196524812],
    [0.00000000057, 4.12235760406, 10028.9508271002],
    [0.00000000055, 1.41700952855, 15906.7641266826],
    [0.00000000053, 2.16328741039, 6418.1409300268],
    [0.0000000006, 2.64683840328, 10018.2468514476],
    [0.00000000068, 5.36539876845, 1228.9621133222],
    [0.00000000051, 5.73824213507, 6048.4411140864],
    [0.00000000053, 0.31937174553, 12721.572099417],
    [0.00000000051, 0.06312524105, 20206.141196331],
    [0.00000000049, 4.53401402385, 6675.7019290922],
    [0.00000000051, 1.15475560534, 10156.9023601348],
    [0.00000000064, 4.5633226877, 16703.07938715119],
    [0.0000000006, 3.61007443614, 9468.267877257],
    [0.00000000059, 3.08413561767, 10025.4277087512],
    [0.00000000064, 2.53229538141, 16703.0448798468],
    [0.00000000056, 3.31988072467, 6518.7582172674],
    [0.00000000047, 1.44559165677, 6643.0918177618],
    [0.0000000005, 1.92342238827, 11614.4332937322],
    [0.00000000047, 4.03794177027, 23958.6317852334],
    [0.00000000046, 3.70927352724, 8859.3625756916],
    [0.0000000006, 2.55506470511, 11780.4903585162],
    [0.00000000047, 1.69256878711, 6660.8695340008],
    [0.00000000044, 6.09481217162, 6460.8122109608],
    [0.00000000044, 2.6304062214, 13936.794505134],
    [0.00000000053, 0.77878945764, 16865.5287696312],
    [0.00000000049, 1.8336854455, 17654.7805397496],
    [0.00000000048, 0.52828042378, 6686.747777707],
    [0.00000000042, 4.30347553493, 9065.5481241288],
    [0.00000000042, 5.71964550673, 7203.8022714934],
    [0.00000000041, 0.98427208931, 20426.571092422],
    [0.00000000051, 3.54335413699, 20597.2439630412],
    [0.00000000041, 0.21219617682, 7314.0085927128],
    [0.00000000038, 2.53074981011, 13207.029307365],
    [0.00000000039, 5.15577369902, 6670.5881880498],
    [0.00000000051, 3.25271478667, 7799.9806455024],
    [0.00000000049, 0.77060706107, 17101.2111369072],
    [0.00000000038, 6.06684699984, 9389.0535407862],
    [0.00000000043, 0.51983815091, 16489.763038061],
    [0.00000000036, 0.84102576439, 23937.856389741],
];

const B1: &[Term] = &[
    [0.00350068845, 5.36847836211, 3340.6124266998],
    [0.0001411603, PI, 0.0],
    [0.00009670755, 5.47877786506, 6681.2248533996],
    [0.00001471918, 3.20205766795, 10021.8372800994],
    [0.00000425864, 3.40843812875, 13362.4497067992],
    [0.00000102039, 0.77617286189, 3337.0893083508],
    [0.00000078848, 3.71768293865, 16703.062133499],
    [0.00000026171, 2.48293558065, 2281.2304965106],
    [0.00000032708, 3.45803723682, 5621.8429232104],
    [0.00000020712, 1.44120802297, 6151.533888305],
    [0.00000018294, 6.03102943125, 529.6909650946],
    [0.0000001568, 3.93075566599, 8962.4553499102],
    [0.00000016975, 4.81115186866, 3344.1355450488],
    [0.00000013067, 0.97324736181, 6677.7017350506],
    [0.00000015622, 2.78241383265, 3340.5951730476],
    [0.00000015622, 4.81318636318, 3340.629680352],
    [0.00000013771, 1.67983063909, 3532.0606928114],
    [0.00000012711, 4.04546734935, 20043.6745601988],
    [0.00000014268, 0.24640247719, 2942.4634232916],
    [0.00000012493, 2.25620513522, 5884.9268465832],
    [0.000000088, 0.34079528233, 398.1490034082],
    [0.00000008637, 1.75213704409, 2544.3144198834],
    [0.00000008903, 5.95437916504, 2810.9214616052],
    [0.00000008102, 0.84279830287, 6283.0758499914],
    [0.0000000925, 4.35071778619, 3496.032826134],
    [0.00000008085, 4.29614034209, 6684.7479717486],
    [0.00000005811, 3.55479498415, 5092.1519581158],
    [0.00000005864, 3.69652093329, 5486.777843175],
    [0.00000005618, 0.03475872145, 3185.1920272656],
    [0.00000005148, 0.85886443528, 3340.545116397],
    [0.00000005145, 0.45169791514, 3340.6797370026],
    [0.00000004898, 4.12922007874, 1059.3819301892],
    [0.00000003471, 5.07253485267, 5088.6288397668],
    [0.00000003102, 3.11487063736, 3339.6321056316],
    [0.00000003013, 1.00910437496, 2914.0142358238],
    [0.00000003171, 1.24730004776, 3738.761430108],
    [0.00000003194, 2.86899092087, 1751.539531416],
    [0.00000002304, 1.38460565999, 3870.3033917944],
    [0.00000002233, 2.91238180064, 3894.1818295422],
    [0.00000002792, 4.27117916474, 8432.7643848156],
    [0.00000002431, 0.14615904873, 4690.4798363586],
    [0.00000002577, 2.78651098185, 6254.6266625236],
    [0.00000001996, 1.51200589223, 4292.3308329504],
    [0.0000000186, 5.15222219319, 796.2980068164],
    [0.00000002014, 5.48528849094, 3127.3133312618],
    [0.00000001922, 4.37668623732, 23384.2869868986],
    [0.00000002248, 4.46756441051, 10025.3603984484],
    [0.00000001782, 2.70229954651, 4136.9104335162],
    [0.00000001621, 2.26742355334, 3149.1641605882],
    [0.00000001452, 1.53948251192, 9492.1463150048],
    [0.00000001373, 3.20232312108, 2146.1654164752],
    [0.00000001332, 5.6796683701, 1592.5960136328],
    [0.00000001378, 4.12087865376, 3723.508958923],
    [0.00000001215, 0.33914405698, 6674.1113063988],
    [0.00000001168, 3.52407129935, 11773.3768115154],
    [0.00000001179, 6.15475441355, 213.299095438],
    [0.00000001173, 1.2603660844, 3341.592747768],
    [0.00000001211, 0.97241747335, 6467.9257579616],
    [0.00000001204, 0.95200561837, 10018.3141617504],
    [0.00000001107, 1.44142157852, 2787.0430238574],
    [0.00000001194, 0.84501638145, 1194.4470102246],
    [0.00000001043, 3.98123209815, 12303.06777661],
    [0.00000001029, 1.21951732572, 4535.0594369244],
    [0.00000000939, 2.99716248257, 7477.522860216],
    [0.00000001303, 1.12409937702, 4399.994356889],
    [0.00000001032, 4.26592917807, 1990.745017041],
    [0.0000000123, 0.37904885593, 6525.8044539654],
    [0.00000000989, 2.37220445455, 9225.539273283],
    [0.00000000946, 3.14940196742, 6489.776587288],
    [0.00000001013, 5.90131661122, 3097.88382272579],
    [0.00000000913, 2.86098924372, 2388.8940204492],
    [0.00000000954, 4.90448639106, 3583.3410306738],
    [0.00000000866, 4.92421595837, 6681.2421070518],
    [0.00000000797, 4.53307543814, 7079.3738568078],
    [0.00000000866, 2.89344915945, 6681.2075997474],
    [0.00000000659, 0.33901474348, 2957.7158944766],
    [0.0000000067, 3.23650405278, 9595.2390892234],
    [0.00000000782, 1.56739177814, 3333.498879699],
    [0.00000000641, 4.4691872125, 6836.6452528338],
    [0.00000000611, 3.97393774087, 6041.3275670856],
    [0.00000000738, 3.7871562478, 4562.4609930212],
    [0.00000000558, 2.92718433901, 1589.0728952838],
    [0.00000000513, 0.96852780537, 9623.6882766912],
    [0.00000000508, 4.07262127921, 7.1135470008],
    [0.00000000512, 1.53960708348, 7740.6067835888],
    [0.00000000481, 3.51023225206, 155.4203994342],
    [0.00000000528, 6.0619072177, 4933.2084403326],
    [0.00000000558, 2.09491968451, 2288.3440435114],
    [0.00000000445, 3.4243988628, 6680.2445323314],
    [0.00000000482, 4.73460866232, 13365.9728251482],
    [0.00000000534, 4.88536251621, 3361.3878221922],
    [0.0000000052, 6.19100285186, 6438.4962494256],
    [0.00000000441, 1.82408206251, 3325.3599555148],
    [0.00000000487, 2.72879191049, 3319.8370312074],
    [0.00000000417, 4.48716253276, 7903.073419721],
    [0.0000000043, 0.62845892205, 5614.7293762096],
    [0.00000000395, 4.89021898045, 10419.9862835076],
    [0.0000000038, 1.91138845097, 3553.9115221378],
    [0.00000000358, 4.21584518245, 426.598190876],
    [0.00000000409, 4.53421956625, 3360.96774609859],
    [0.00000000426, 5.47172830908, 3205.5473466644],
    [0.0000000033, 1.00078638665, 8955.3418029094],
    [0.00000000322, 2.42607399606, 2274.1169495098],
    [0.00000000316, 3.2206408943, 1221.8485663214],
    [0.00000000312, 3.66073476074, 3337.021998048],
    [0.0000000031, 4.09100416919, 3344.2028553516],
    [0.00000000295, 2.87635162282, 7210.9158184942],
    [0.00000000329, 5.64440592793, 12832.7587417046],
    [0.00000000306, 1.52567836482, 7875.6718636242],
    [0.00000000284, 0.56373187712, 6681.2921637024],
    [0.00000000358, 4.21258737082, 1052.2683831884],
    [0.00000000347, 1.52200237477, 10213.285546211],
    [0.00000000268, 3.57749600251, 9830.3890139878],
    [0.00000000346, 1.65247014273, 6682.2051744678],
    [0.00000000269, 4.4518241708, 9381.9399937854],
    [0.00000000285, 0.97118840317, 6681.1575430968],
    [0.00000000256, 3.67744143301, 1066.49547719],
    [0.00000000269, 1.78448639785, 6127.6554505572],
    [0.00000000312, 4.63751658715, 5331.3574437408],
    [0.00000000317, 6.15274242841, 3320.257107301],
    [0.00000000245, 4.71030710599, 26724.8994135984],
    [0.00000000249, 3.31328995337, 10818.1352869158],
    [0.0000000024, 4.87364672707, 6144.4203413042],
    [0.00000000239, 1.35709001659, 7064.1213856228],
    [0.00000000237, 3.19837233399, 5729.506447149],
    [0.00000000278, 1.5084206034, 4929.6853219836],
    [0.00000000274, 3.61160906396, 191.4482661116],
    [0.00000000248, 3.93789974497, 11243.6858464208],
    [0.00000000242, 2.57630671866, 3355.8648978848],
    [0.00000000241, 1.89683861728, 15643.6802033098],
    [0.00000000228, 0.71217112323, 9866.4168806652],
    [0.00000000246, 0.16913226579, 2700.7151403858],
    [0.00000000219, 0.03864812268, 522.5774180938],
    [0.00000000215, 3.44260776071, 8827.3902698748],
    [0.00000000206, 5.23615052385, 6923.9534573736],
    [0.00000000202, 0.60277862639, 10021.8200264472],
    [0.00000000226, 2.4333250327, 8429.2412664666],
    [0.00000000202, 2.63373646725, 10021.8545337516],
    [0.00000000199, 3.26545613445, 382.8965322232],
    [0.00000000198, 4.50685315424, 242.728603974],
    [0.00000000215, 2.12744795327, 553.5694028424],
    [0.00000000177, 3.92599588022, 8031.0922630584],
    [0.00000000162, 3.94498519498, 2921.1277828246],
    [0.00000000199, 4.22948972595, 3312.163239232],
    [0.00000000188, 0.67072289565, 6298.3283211764],
    [0.0000000016, 2.90951395323, 6872.6731195112],
    [0.00000000155, 1.24529852403, 3364.4908644476],
    [0.00000000186, 2.44723831367, 3503.079062832],
    [0.00000000139, 5.7549355704, 7632.9432596502],
    [0.00000000149, 0.49665393273, 8969.568896911],
    [0.00000000132, 4.97828413367, 1748.016413067],
    [0.0000000013, 0.66881298338, 10014.7237330986],
    [0.00000000128, 2.80753554051, 14584.2982731206],
    [0.00000000176, 2.37291314099, 2118.7638603784],
    [0.00000000127, 1.76223414864, 11081.2192102886],
    [0.00000000127, 0.26234206855, 13358.9265884502],
    [0.00000000163, 5.83356697025, 639.897286314],
    [0.00000000129, 2.02607662846, 3346.1353510072],
    [0.00000000155, 1.5718930764, 3767.2106175758],
    [0.00000000133, 4.20989922795, 11371.7046897582],
    [0.00000000114, 2.12636383988, 6688.3384004004],
    [0.0000000013, 1.33114943655, 3347.7259737006],
    [0.0000000011, 5.78893316282, 16173.3711684044],
    [0.00000000105, 3.27202438053, 15113.9892382152],
    [0.00000000117, 5.66812806862, 536.8045120954],
    [0.00000000106, 1.21268139587, 7234.794256242],
    [0.00000000108, 0.94652521237, 9808.5381846614],
    [0.00000000121, 4.22204758443, 6158.6474353058],
    [0.00000000124, 4.92495255567, 12964.300703391],
    [0.00000000142, 3.85764234922, 6894.5239488376],
    [0.00000000099, 5.62543167, 10973.55568635],
    [0.000000001, 2.56456804207, 3178.1457905676],
    [0.00000000131, 0.08971075365, 8273.8208670324],
    [0.00000000112, 3.14240135508, 3316.733988952],
    [0.00000000095, 0.64723185059, 2487.4160449478],
    [0.00000000087, 4.14322802003, 3603.6963500726],
    [0.00000000087, 3.50260474148, 3077.528503327],
    [0.00000000096, 5.13010621713, 3304.5845600224],
    [0.00000000082, 4.87880877413, 5828.0284716476],
    [0.00000000083, 2.04400907684, 18984.2926300096],
    [0.00000000085, 3.33671991814, 1758.6530784168],
    [0.00000000099, 3.28955694324, 17654.7805397496],
    [0.00000000078, 0.89238228021, 2699.7348193176],
    [0.00000000095, 0.32948273562, 3863.1898447936],
    [0.00000000083, 0.80327899268, 5085.038411115],
    [0.00000000091, 1.48623539837, 8270.2977486834],
    [0.00000000075, 4.91191036053, 10021.7699697966],
    [0.00000000079, 4.25171159471, 7373.3824546264],
    [0.00000000084, 2.16662156833, 12566.1516999828],
    [0.00000000088, 2.78893554858, 11769.8536931664],
    [0.00000000095, 0.29428946155, 5628.9564702112],
    [0.00000000076, 5.23354729169, 13760.5987102074],
    [0.00000000092, 1.40883592065, 3336.7310913418],
    [0.00000000069, 3.5047791691, 10713.9948813262],
    [0.00000000079, 0.61833410504, 951.7184062506],
    [0.0000000007, 1.93458925881, 3475.6775067352],
    [0.00000000066, 5.01996258363, 16706.585251848],
    [0.00000000067, 3.68731475523, 4032.7700279266],
    [0.00000000071, 1.71691035008, 10575.4066829418],
    [0.00000000086, 1.82073461894, 10404.7338123226],
    [0.00000000064, 2.43149744819, 2648.454825473],
    [0.00000000062, 0.25250107112, 3980.5097130138],
    [0.00000000062, 3.1642052001, 13517.8701062334],
    [0.00000000078, 1.41762772678, 3.523118349],
    [0.00000000086, 3.34935714534, 1581.959348283],
    [0.00000000064, 3.75812808116, 1596.1864422846],
    [0.00000000061, 1.37421861116, 419.4846438752],
    [0.00000000055, 1.11154560464, 433.7117378768],
    [0.00000000061, 5.33515994167, 853.196381752],
    [0.00000000059, 0.8038238079, 13362.432453147],
    [0.00000000055, 0.37478855406, 149.5631971346],
    [0.00000000053, 0.55329112916, 14314.1681130498],
    [0.00000000059, 0.07234691744, 6531.661656265],
    [0.00000000059, 2.83458587563, 13362.4669604514],
    [0.00000000059, 4.13409540555, 4407.1079038898],
    [0.00000000057, 5.57913927474, 3376.6402933772],
    [0.00000000049, 4.58036235824, 10551.528245194],
    [0.0000000005, 2.01769015785, 10022.8176011676],
    [0.00000000055, 1.36081433917, 21393.5419698576],
    [0.00000000048, 1.59939595487, 18052.9295431578],
    [0.00000000045, 4.97928157994, 8671.9698704406],
    [0.00000000044, 2.58542985685, 13916.0191096416],
    [0.00000000047, 1.40206686464, 8425.6508378148],
    [0.00000000043, 0.21864618144, 9779.1086761254],
    [0.00000000042, 6.22365857047, 3914.9572250346],
    [0.00000000048, 3.44104044998, 692.1576012268],
    [0.00000000043, 3.21191030055, 6247.5131155228],
    [0.00000000055, 4.013214817, 10177.2576795336],
    [0.00000000053, 2.9328571132, 3981.490034082],
    [0.00000000039, 5.54634215618, 6702.000248892],
    [0.00000000041, 2.46188112193, 6660.4494579072],
    [0.00000000049, 3.0423606533, 640.8776073822],
    [0.00000000039, 1.62689158397, 3335.0895023924],
    [0.00000000038, 3.31198341709, 1744.4259844152],
    [0.00000000038, 6.16317067723, 2818.035008606],
    [0.00000000038, 4.03534957207, 103.0927742186],
    [0.00000000044, 0.91040525278, 5459.3762870782],
    [0.00000000049, 1.88325571471, 11216.284290324],
    [0.00000000046, 5.62762941168, 9168.6408983474],
    [0.00000000035, 1.65976191407, 12168.0026965746],
    [0.00000000047, 4.52334272666, 10021.9045904022],
    [0.00000000039, 2.08367076229, 13745.3462390224],
    [0.00000000039, 4.76186135572, 20597.2439630412],
    [0.00000000039, 3.00951950244, 3344.4937620578],
    [0.00000000037, 1.33065895739, 12295.9542296092],
    [0.0000000004, 3.96893429107, 13171.0014406876],
    [0.00000000032, 0.91212661789, 12310.1813236108],
    [0.00000000032, 2.22618836835, 7107.8230442756],
    [0.00000000032, 4.9607870365, 24734.1543965574],
    [0.00000000037, 3.30085609301, 20995.3929664494],
    [0.00000000033, 3.70858397913, 10020.8569590312],
    [0.00000000031, 4.18674524484, 17256.6315363414],
    [0.00000000034, 3.25657016622, 14054.607308026],
    [0.00000000032, 5.75360661734, 6546.1597733642],
    [0.00000000031, 3.16209740784, 12935.8515159232],
    [0.00000000037, 2.14901622101, 6665.9723822146],
    [0.0000000003, 0.21926429217, 6660.8695340008],
    [0.0000000003, 3.55459460301, 9070.1188738488],
    [0.00000000029, 2.97927335664, 2766.267628365],
    [0.00000000029, 4.65051930186, 10235.1363755374],
    [0.0000000003, 5.168824354, 16304.9131300908],
    [0.00000000032, 5.01760544488, 3191.0492295652],
    [0.00000000029, 2.93988761068, 6696.4773245846],
    [0.00000000029, 5.06447742493, 5099.2655051166],
    [0.00000000029, 5.68073325802, 3329.97576135],
    [0.00000000029, 0.43949269085, 3351.2490920496],
    [0.00000000032, 1.37056688814, 6040.3472460174],
    [0.00000000032, 1.42334455474, 76.2660712756],
    [0.00000000033, 0.36423446435, 6604.958782124],
    [0.00000000033, 4.85478789063, 6701.5801727984],
    [0.0000000003, 3.33348460172, 3369.0616141676],
    [0.00000000028, 0.60182098585, 11766.2632645146],
    [0.00000000026, 1.05197848649, 13207.029307365],
    [0.00000000026, 5.03535225585, 30065.5118402982],
    [0.00000000034, 3.65553061498, 14158.7477136156],
    [0.00000000025, 4.60925601393, 8329.671610597],
    [0.00000000025, 2.05970140678, 17395.2197347258],
    [0.0000000003, 5.22285260441, 9485.032768004],
    [0.00000000025, 4.84964369679, 1648.4467571974],
    [0.00000000026, 5.47626814223, 3074.005384978],
    [0.00000000024, 2.45239543931, 17085.9586657222],
    [0.00000000029, 5.36428737888, 2707.8286873866],
    [0.00000000024, 5.574885448, 10264.5658840734],
    [0.00000000025, 4.22744782935, 1692.1656695024],
    [0.00000000023, 6.09244870438, 20199.094959633],
    [0.00000000028, 1.30366587075, 8439.8779318164],
    [0.00000000032, 2.13597148493, 9468.267877257],
];

const B2: &[Term] = &[
    [0.0001672669, 0.60221392419, 3340.6124266998],
    [0.00004986799, PI, 0.0],
    [0.00000302141, 5.55871276021, 6681.2248533996],
    [0.00000025767, 1.89662673499, 13362.4497067992],
    [0.00000021452, 0.91749968618, 10021.8372800994],
    [0.0000001182, 2.242407387, 3337.0893083508],
    [0.00000007985, 2.24892866611, 16703.062133499],
    [0.0000000296, 5.89425825808, 3496.032826134],
    [0.00000002445, 5.18770525274, 5621.8429232104],
    [0.00000001428, 1.2523814058, 2281.2304965106],
    [0.00000001779, 2.5875996852, 20043.6745601988],
    [0.00000001501, 3.18533003542, 3532.0606928114],
    [0.00000001259, 4.80695172904, 3185.1920272656],
    [0.00000001029, 2.35029907056, 6677.7017350506],
    [0.00000001109, 3.80982317372, 5884.9268465832],
    [0.00000000928, 0.29719160927, 3344.1355450488],
    [0.0000000086, 3.1169831893, 6151.533888305],
    [0.00000000853, 1.33003321402, 529.6909650946],
    [0.00000000883, 5.18681316017, 5486.777843175],
    [0.000000011, 1.82962075794, 2942.4634232916],
    [0.00000000815, 3.40910567373, 2544.3144198834],
    [0.00000000702, 5.49076132554, 8962.4553499102],
    [0.00000000644, 0.31400306761, 5088.6288397668],
    [0.00000000745, 4.30248377111, 3340.5951730476],
    [0.00000000586, 4.48071459693, 3894.1818295422],
    [0.00000000681, 5.40951261308, 2810.9214616052],
    [0.00000000745, 0.05006463495, 3340.629680352],
    [0.00000000542, 4.68895461946, 3339.6321056316],
    [0.00000000497, 4.65665197749, 5092.1519581158],
    [0.0000000046, 1.0667034361, 3097.88382272579],
    [0.00000000423, 3.08034568777, 4292.3308329504],
    [0.00000000381, 2.2493311519, 6283.0758499914],
    [0.00000000429, 1.70668733378, 4690.4798363586],
    [0.00000000339, 2.92195933142, 23384.2869868986],
    [0.0000000031, 5.63324402105, 3723.508958923],
    [0.00000000287, 1.98619629868, 398.1490034082],
    [0.00000000298, 2.58990636818, 6684.7479717486],
    [0.00000000323, 5.1523014439, 6525.8044539654],
    [0.00000000247, 2.36923535528, 3340.545116397],
    [0.00000000247, 1.96071951597, 3340.6797370026],
    [0.00000000223, 4.75562842441, 2146.1654164752],
    [0.0000000024, 3.53331653789, 3583.3410306738],
    [0.00000000238, 4.69268478666, 6254.6266625236],
    [0.00000000198, 6.21548965568, 2787.0430238574],
    [0.00000000202, 4.25439775032, 3333.498879699],
    [0.00000000158, 1.89216973387, 6674.1113063988],
    [0.00000000185, 2.99350590687, 10025.3603984484],
    [0.00000000177, 1.41002572971, 6438.4962494256],
    [0.00000000138, 1.23172102079, 3127.3133312618],
    [0.00000000153, 5.93528616595, 6836.6452528338],
    [0.00000000106, 5.35414400998, 3738.761430108],
    [0.00000000102, 3.67040445208, 1059.3819301892],
    [0.00000000136, 1.06039656714, 2388.8940204492],
    [0.00000000093, 5.04434801864, 155.4203994342],
    [0.00000000093, 2.7081739491, 8955.3418029094],
    [0.00000000108, 6.13917250674, 1748.016413067],
    [0.00000000116, 5.9773948353, 2914.0142358238],
    [0.00000000099, 1.50221319099, 1751.539531416],
    [0.00000000092, 2.68470906437, 1990.745017041],
    [0.00000000077, 4.01966292109, 1592.5960136328],
    [0.00000000076, 4.49660101731, 4562.4609930212],
    [0.00000000076, 5.67354102576, 6041.3275670856],
    [0.00000000078, 0.79220883728, 2288.3440435114],
    [0.00000000074, 5.84795427965, 3341.592747768],
    [0.0000000008, 5.48556941416, 8432.7643848156],
    [0.00000000065, 2.11705931744, 10018.3141617504],
    [0.00000000066, 5.08073805943, 2957.7158944766],
    [0.00000000059, 3.79695096075, 6923.9534573736],
    [0.00000000061, 4.51116100631, 4933.2084403326],
    [0.00000000059, 0.27765984344, 6127.6554505572],
    [0.00000000052, 5.84885902302, 4535.0594369244],
    [0.00000000051, 1.45495904398, 7477.522860216],
    [0.00000000054, 1.50278239577, 6489.776587288],
    [0.00000000056, 5.23212313891, 9866.4168806652],
    [0.00000000057, 4.73711357046, 2274.1169495098],
    [0.00000000051, 2.48654805044, 6467.9257579616],
    [0.00000000047, 3.25899585469, 26724.8994135984],
    [0.00000000048, 1.12255878532, 1349.8674096588],
    [0.00000000048, 2.87122326236, 242.728603974],
    [0.00000000045, 1.61358524585, 5729.506447149],
    [0.00000000043, 2.2433473149, 7.1135470008],
    [0.00000000044, 4.61065704096, 11773.3768115154],
    [0.00000000042, 3.32038536161, 13365.9728251482],
    [0.00000000047, 5.10736479739, 8969.568896911],
    [0.00000000044, 4.64194663616, 4399.994356889],
    [0.00000000039, 5.45779680648, 8031.0922630584],
    [0.00000000044, 5.2140954242, 4136.9104335162],
    [0.00000000045, 4.2620606379, 796.2980068164],
    [0.00000000048, 3.04342098072, 5331.3574437408],
    [0.00000000042, 2.12882700518, 213.299095438],
    [0.00000000038, 2.49365585516, 951.7184062506],
    [0.00000000037, 3.44816851943, 3325.3599555148],
    [0.00000000038, 3.1398138598, 3149.1641605882],
    [0.00000000039, 3.6498494618, 553.5694028424],
    [0.00000000036, 0.54858124109, 7632.9432596502],
    [0.00000000032, 4.29985057106, 3355.8648978848],
    [0.00000000037, 6.26349600634, 6682.2051744678],
    [0.00000000037, 3.83188032092, 3870.3033917944],
    [0.00000000031, 4.94959395405, 6680.2445323314],
    [0.00000000035, 6.14813219827, 3360.96774609859],
    [0.00000000029, 0.54115054572, 6681.2921637024],
    [0.00000000035, 1.49899662719, 3320.257107301],
    [0.00000000033, 0.19183878029, 3347.7259737006],
    [0.00000000036, 3.28055425527, 1589.0728952838],
    [0.00000000031, 5.66015228291, 1066.49547719],
    [0.00000000028, 4.1817845554, 7210.9158184942],
    [0.00000000025, 1.21627749818, 9492.1463150048],
    [0.00000000029, 2.02283118033, 7234.794256242],
    [0.00000000024, 2.96777681837, 7064.1213856228],
    [0.00000000024, 2.16823248221, 10419.9862835076],
    [0.00000000022, 4.67496434823, 1194.4470102246],
    [0.00000000022, 5.01797528499, 9595.2390892234],
    [0.00000000028, 4.19843924702, 8429.2412664666],
    [0.00000000023, 6.2119501005, 7740.6067835888],
    [0.00000000025, 1.45100528915, 6872.6731195112],
    [0.00000000024, 1.93342510858, 2699.7348193176],
    [0.00000000028, 5.8700989815, 1052.2683831884],
    [0.00000000025, 2.49707182259, 2118.7638603784],
    [0.0000000002, 0.15682384975, 3205.5473466644],
    [0.00000000019, 3.82087005916, 12303.06777661],
    [0.0000000002, 6.26534330674, 7875.6718636242],
    [0.00000000019, 0.99282533197, 522.5774180938],
    [0.00000000018, 4.11668144665, 426.598190876],
    [0.0000000002, 3.28531167827, 9225.539273283],
    [0.00000000019, 5.72169822815, 11371.7046897582],
    [0.00000000018, 4.76871968197, 382.8965322232],
    [0.00000000017, 0.96519535826, 191.4482661116],
    [0.00000000017, 0.86184324841, 10973.55568635],
    [0.00000000018, 6.22706341047, 9381.9399937854],
    [0.00000000015, 0.54135050421, 640.8776073822],
];

const B3: &[Term] = &[
    [0.00000606506, 1.98050633529, 3340.6124266998],
    [0.00000042611, 0.0, 0.0],
    [0.00000013652, 1.795882288, 6681.2248533996],
    [0.0000000273, 3.45377082121, 10021.8372800994],
    [0.00000000929, 3.75226159072, 3337.0893083508],
    [0.00000000607, 0.10618486408, 13362.4497067992],
    [0.00000000617, 1.14471772765, 3496.032826134],
    [0.00000000479, 0.70504966293, 16703.062133499],
    [0.00000000185, 3.28778562029, 3185.1920272656],
    [0.00000000169, 0.29980532608, 5621.8429232104],
    [0.00000000158, 1.09025317222, 20043.6745601988],
    [0.00000000123, 2.55664973413, 3097.88382272579],
    [0.00000000126, 4.74517022983, 3532.0606928114],
    [0.00000000093, 6.03607685759, 3894.1818295422],
    [0.00000000099, 4.92257049901, 2544.3144198834],
    [0.00000000106, 3.41315845439, 2942.4634232916],
    [0.00000000062, 6.257389499, 3339.6321056316],
    [0.00000000058, 4.64867983361, 4292.3308329504],
    [0.0000000005, 3.75358626972, 6677.7017350506],
    [0.0000000005, 1.89408668049, 5088.6288397668],
    [0.00000000058, 3.65295480755, 6525.8044539654],
    [0.00000000045, 0.38295906298, 5486.777843175],
    [0.00000000052, 3.25535694335, 4690.4798363586],
    [0.00000000044, 1.89342588822, 3583.3410306738],
    [0.00000000037, 0.04871920725, 2146.1654164752],
    [0.00000000039, 0.91787211117, 3723.508958923],
    [0.00000000051, 5.24063514394, 5884.9268465832],
    [0.00000000036, 2.79633276263, 529.6909650946],
    [0.00000000032, 1.44641701752, 23384.2869868986],
    [0.00000000024, 5.41362501363, 3340.5951730476],
    [0.00000000023, 4.70639896508, 2787.0430238574],
    [0.00000000021, 1.12581894224, 3340.629680352],
    [0.00000000021, 0.51744721589, 8962.4553499102],
    [0.00000000018, 0.36433365806, 155.4203994342],
    [0.00000000018, 5.53170427847, 3333.498879699],
    [0.00000000019, 4.34401282378, 6151.533888305],
    [0.00000000021, 2.9476550159, 398.1490034082],
    [0.0000000002, 5.96181389299, 5092.1519581158],
    [0.00000000017, 0.80891817293, 1194.4470102246],
    [0.00000000011, 0.43817745316, 1059.3819301892],
    [0.00000000014, 1.06654064248, 6836.6452528338],
];

const B4: &[Term] = &[
    [0.00000011334, 3.45724352586, 3340.6124266998],
    [0.00000013369, 0.0, 0.0],
    [0.00000000744, 0.50445805257, 6681.2248533996],
    [0.00000000148, 1.05056602649, 10021.8372800994],
    [0.00000000102, 2.66185835593, 3496.032826134],
    [0.00000000053, 5.27888218929, 3337.0893083508],
    [0.00000000022, 4.09971603267, 3097.88382272579],
    [0.00000000023, 1.7242234213, 3185.1920272656],
    [0.00000000013, 5.41704779112, 16703.062133499],
    [0.00000000013, 2.06957065662, 13362.4497067992],
    [0.0000000001, 0.959895956, 3894.1818295422],
];

const B5: &[Term] = &[
    [0.00000000457, 4.86794125358, 3340.6124266998],
    [0.00000000053, 5.30547050586, 6681.2248533996],
    [0.00000000012, 5.75114070583, 10021.8372800994],
    [0.00000000013, 4.17736925293, 3496.032826134],
    [0.00000000007, 0.0, 0.0],
];

const R0: &[Term] = &[
    [1.53033488276, 0.0, 0.0],
    [0.14184953153, 3.47971283519, 3340.6124266998],
    [0.00660776357, 3.81783442097, 6681.2248533996],
    [0.00046179117, 4.15595316284, 10021.8372800994],
    [0.00008109738, 5.55958460165, 2810.9214616052],
    [0.00007485315, 1.77238998069, 5621.8429232104],
    [0.00005523193, 1.3643631888, 2281.2304965106],
    [0.0000382516, 4.49407182408, 13362.4497067992],
    [0.00002306539, 0.09081742493, 2544.3144198834],
    [0.00001999399, 5.36059605227, 3337.0893083508],
    [0.00002484385, 4.92545577893, 2942.4634232916],
    [0.00001960198, 4.74249386323, 3344.1355450488],
    [0.00001167115, 2.11261501155, 5092.1519581158],
    [0.00001102828, 5.0090826416, 398.1490034082],
    [0.00000899077, 4.40790433994, 529.6909650946],
    [0.00000992252, 5.83862401067, 6151.533888305],
    [0.00000807348, 2.10216647104, 1059.3819301892],
    [0.0000079791, 3.44839026172, 796.2980068164],
    [0.0000074098, 1.49906336892, 2146.1654164752],
    [0.0000069234, 2.13378814785, 8962.4553499102],
    [0.00000633144, 0.89353285018, 3340.5951730476],
    [0.00000725583, 1.24516913473, 8432.7643848156],
    [0.0000063314, 2.92430448169, 3340.629680352],
    [0.00000574352, 0.82896196337, 2914.0142358238],
    [0.00000526187, 5.38292276228, 3738.761430108],
    [0.00000629976, 1.28738135858, 1751.539531416],
    [0.00000472776, 5.19850457873, 3127.3133312618],
    [0.00000348095, 4.83219198908, 16703.062133499],
    [0.00000283702, 2.90692294913, 3532.0606928114],
    [0.00000279552, 5.25749247548, 6283.0758499914],
    [0.00000233827, 5.10546492529, 5486.777843175],
    [0.00000219428, 5.58340248784, 191.4482661116],
    [0.00000269891, 3.76394728622, 5884.9268465832],
    [0.00000208333, 5.25476080773, 3340.545116397],
    [0.00000275224, 2.90818883832, 1748.016413067],
    [0.00000275501, 1.21767967781, 6254.6266625236],
    [0.00000239133, 2.03669896238, 1194.4470102246],
    [0.0000022319, 4.19861593779, 3149.1641605882],
    [0.00000182686, 5.08062683355, 6684.7479717486],
    [0.00000186213, 5.69871555748, 6677.7017350506],
    [0.00000175995, 5.95341786369, 3870.3033917944],
    [0.00000178613, 4.18423025538, 3333.498879699],
    [0.00000208336, 4.84626442122, 3340.6797370026],
    [0.00000228128, 3.2552902062, 6872.6731195112],
    [0.00000144286, 0.21296012258, 5088.6288397668],
    [0.00000163534, 3.79889068111, 4136.9104335162],
    [0.0000013312, 1.5391010671, 7903.073419721],
    [0.00000141759, 2.47790321309, 4562.4609930212],
    [0.00000114941, 4.31745088059, 1349.8674096588],
    [0.00000118781, 2.12178071222, 1589.0728952838],
    [0.00000102096, 6.18138550087, 9492.1463150048],
    [0.00000128555, 5.49883294915, 8827.3902698748],
    [0.00000111538, 0.55339169625, 11243.6858464208],
    [0.00000082498, 1.6222704459, 11773.3768115154],
    [0.00000083212, 0.61553380568, 8429.2412664666],
    [0.0000008447, 0.6227459311, 1592.5960136328],
    [0.00000086659, 1.74988330093, 2700.7151403858],
    [0.00000071826, 2.47489899385, 12303.06777661],
    [0.00000085312, 1.61621097912, 4690.4798363586],
    [0.00000063641, 2.67334126661, 426.598190876],
    [0.00000068599, 2.40197828418, 4399.994356889],
    [0.00000058559, 4.72052787516, 213.299095438],
    [0.00000062015, 1.10065866221, 1221.8485663214],
    [0.00000066509, 2.21307705185, 6041.3275670856],
    [0.00000055811, 1.23288325946, 3185.1920272656],
    [0.00000054989, 5.72691385306, 951.7184062506],
    [0.00000052418, 3.02366828926, 4292.3308329504],
    [0.00000055686, 5.44686699242, 3723.508958923],
    [0.00000058959, 3.26242666052, 6681.2421070518],
    [0.00000044629, 2.0147364039, 8031.0922630584],
    [0.00000058959, 1.23165502899, 6681.2075997474],
    [0.00000042444, 2.26551590902, 155.4203994342],
    [0.00000038956, 2.57760416009, 3341.592747768],
    [0.00000051561, 5.72326937712, 7079.3738568078],
    [0.00000048939, 5.61614696751, 3553.9115221378],
    [0.00000045414, 5.43290921705, 6467.9257579616],
    [0.00000036435, 4.43921812388, 3894.1818295422],
    [0.0000003598, 1.15966567007, 2288.3440435114],
    [0.00000035265, 5.49029710802, 1990.745017041],
    [0.00000042191, 1.6325374276, 5628.9564702112],
    [0.00000044292, 5.0034136685, 5614.7293762096],
    [0.00000033623, 5.17029029766, 20043.6745601988],
    [0.00000043256, 1.03732072925, 11769.8536931664],
    [0.00000039237, 1.24237122859, 3339.6321056316],
    [0.00000031943, 4.59258406791, 2274.1169495098],
    [0.00000030345, 2.4417767013, 11371.7046897582],
    [0.00000032259, 2.38215172582, 4535.0594369244],
    [0.0000003187, 4.37521442752, 3.523118349],
    [0.0000002935, 4.06034813442, 3097.88382272579],
    [0.00000031972, 1.93970478412, 382.8965322232],
    [0.00000026166, 5.58466944895, 9623.6882766912],
    [0.00000027904, 4.25805969214, 3191.0492295652],
    [0.00000033065, 0.85467740581, 553.5694028424],
    [0.00000027543, 1.57668567401, 9595.2390892234],
    [0.00000025159, 0.81355213242, 10713.9948813262],
    [0.0000002207, 0.85747723964, 3319.8370312074],
    [0.00000024772, 5.38970742761, 2818.035008606],
    [0.00000023359, 6.01453778225, 3496.032826134],
    [0.00000024732, 2.58034797703, 2803.8079146044],
    [0.00000019365, 5.18528750472, 6681.2921637024],
    [0.00000019122, 5.41968559451, 10025.3603984484],
    [0.00000019364, 5.59378382138, 6681.1575430968],
    [0.0000001833, 5.7956732424, 7064.1213856228],
    [0.00000018193, 5.61307426173, 7.1135470008],
    [0.00000020392, 4.53637816869, 6489.776587288],
    [0.0000002126, 6.19160142215, 14054.607308026],
    [0.00000017094, 1.55004739305, 2957.7158944766],
    [0.00000022791, 3.41709388606, 7632.9432596502],
    [0.00000020585, 2.98697279083, 3361.3878221922],
    [0.00000018005, 2.81431094394, 4032.7700279266],
    [0.00000017049, 6.15528099726, 10404.7338123226],
    [0.00000016488, 3.84534700818, 10973.55568635],
    [0.00000016052, 0.92823508003, 14584.2982731206],
    [0.00000021027, 2.38474290907, 4989.0591838972],
    [0.00000016267, 1.92321585819, 7373.3824546264],
    [0.00000016291, 6.28233085307, 7210.9158184942],
    [0.00000018585, 4.07325116588, 2388.8940204492],
    [0.00000015977, 4.58368417141, 3264.3463554242],
    [0.00000019913, 2.7351844595, 5099.2655051166],
    [0.00000019661, 1.86285979, 3443.7052009184],
    [0.000000165, 4.14061745086, 7477.522860216],
    [0.00000019495, 6.03778234182, 10018.3141617504],
    [0.00000015104, 2.65433427561, 2787.0430238574],
    [0.00000019099, 0.22623441108, 13745.3462390224],
    [0.00000017163, 3.18825562972, 3347.7259737006],
    [0.00000013423, 2.12818658793, 3344.2028553516],
    [0.0000001541, 2.2077350796, 2118.7638603784],
    [0.00000017238, 3.67067776368, 3205.5473466644],
    [0.00000013113, 4.27490214998, 14314.1681130498],
    [0.00000016451, 2.86641622696, 14712.317116458],
    [0.00000013734, 1.68629769646, 3337.021998048],
    [0.00000016659, 4.52130808861, 6674.1113063988],
    [0.0000001183, 0.19684525299, 3475.6775067352],
    [0.00000011767, 3.22897247987, 5828.0284716476],
    [0.00000011886, 4.82057654742, 7234.794256242],
    [0.00000010609, 1.73997337551, 639.897286314],
    [0.00000011154, 0.23859830185, 12832.7587417046],
    [0.0000001103, 0.4454170644, 10213.285546211],
    [0.0000001024, 5.74758340632, 242.728603974],
    [0.00000010051, 2.45102946726, 4929.6853219836],
    [0.00000010061, 0.78907665448, 9381.9399937854],
    [0.00000010065, 5.37506605762, 5085.038411115],
    [0.00000011902, 0.79897698904, 3265.8308281325],
    [0.0000000899, 0.96463418322, 4933.2084403326],
    [0.0000000897, 4.18326774405, 9225.539273283],
    [0.00000008982, 1.98501418026, 15113.9892382152],
    [0.00000008324, 1.93694866513, 1648.4467571974],
    [0.00000007833, 2.04997447879, 1758.6530784168],
    [0.00000007957, 3.92331072722, 2921.1277828246],
    [0.00000010224, 2.66497189021, 2487.4160449478],
    [0.00000008277, 0.94860765546, 2906.900688823],
    [0.00000007371, 0.84378341481, 692.1576012268],
    [0.00000007545, 5.68031160782, 13916.0191096416],
    [0.00000007912, 2.81294761885, 15643.6802033098],
    [0.00000006958, 3.32193127272, 3230.4061054804],
    [0.00000007426, 6.09656283295, 3583.3410306738],
    [0.00000006402, 4.19806996774, 5202.3582793352],
    [0.00000006529, 6.1192925271, 135.0650800354],
    [0.0000000613, 0.00117252232, 6836.6452528338],
    [0.00000006226, 6.10683955669, 17256.6315363414],
    [0.00000008193, 5.24811458833, 10575.4066829418],
    [0.00000006168, 3.60069207439, 10021.8545337516],
    [0.00000006169, 1.56992114335, 10021.8200264472],
    [0.00000005671, 0.1365030666, 13524.9163429314],
    [0.00000006257, 4.50450768937, 8425.6508378148],
    [0.00000005249, 2.70122358603, 4459.3682188026],
    [0.00000006479, 2.74267498287, 7740.6067835888],
    [0.0000000553, 6.06408145092, 10419.9862835076],
    [0.00000005536, 5.74996063243, 12168.0026965746],
    [0.00000006826, 4.69327545839, 17654.7805397496],
    [0.00000005005, 4.68382632238, 522.5774180938],
    [0.00000006328, 3.31896726895, 3767.2106175758],
    [0.00000004734, 0.00755678425, 3325.3599555148],
    [0.00000005032, 2.33696685608, 1052.2683831884],
    [0.00000004661, 5.15051711401, 1066.49547719],
    [0.00000004724, 5.77956037309, 9808.5381846614],
    [0.00000005136, 1.57259709878, 6525.8044539654],
    [0.00000004522, 1.44218620352, 3369.0616141676],
    [0.00000006189, 4.58996159356, 6531.661656265],
    [0.00000006205, 4.48164856516, 22747.2907148744],
    [0.00000005329, 4.55145599182, 1744.4259844152],
    [0.00000004511, 5.94511266539, 6894.5239488376],
    [0.0000000433, 3.10901365758, 4569.574540022],
    [0.00000005366, 5.08043436437, 2707.8286873866],
    [0.00000005134, 1.28568358496, 8439.8779318164],
    [0.00000004127, 5.48538052912, 2699.7348193176],
    [0.00000005394, 5.21695066244, 5305.4510535538],
    [0.00000004449, 5.56764082611, 16865.5287696312],
    [0.00000003898, 1.4878243479, 9168.6408983474],
    [0.00000003863, 1.2305080393, 16858.4825329332],
    [0.00000003766, 0.27090392616, 17395.2197347258],
    [0.00000004683, 3.05668892586, 5518.7501489918],
    [0.00000004258, 2.7909014579, 3503.079062832],
    [0.00000003864, 0.37957291785, 10177.2576795336],
    [0.00000003992, 1.8442476803, 3134.4268782626],
    [0.00000003643, 2.95318600206, 6144.4203413042],
    [0.00000003654, 1.58063207414, 6680.2445323314],
    [0.00000003931, 1.98436570971, 8969.568896911],
    [0.0000000335, 2.72637081667, 7875.6718636242],
    [0.00000003623, 2.91544991631, 6682.2051744678],
    [0.00000004392, 0.81931997702, 3302.479391062],
    [0.00000004062, 5.46935175827, 3120.199784261],
    [0.00000003319, 1.77193665786, 3116.2676309979],
    [0.0000000351, 1.18027333874, 10184.3039162316],
    [0.00000004008, 1.33675167812, 6247.5131155228],
    [0.00000003603, 0.15469852619, 2178.137722292],
    [0.00000003313, 3.12853663982, 17277.4069318338],
    [0.00000004138, 4.39568891039, 3074.005384978],
    [0.00000003201, 3.36492925275, 2384.3232707292],
    [0.00000003991, 3.8286783691, 3355.8648978848],
    [0.00000004205, 1.9053227917, 263.0839233728],
    [0.00000003743, 4.25458024187, 6261.7402095244],
    [0.00000003111, 1.65445053349, 20199.094959633],
    [0.00000003634, 5.55063049451, 632.7837393132],
    [0.00000002892, 1.915149207, 12935.8515159232],
    [0.00000003373, 5.50812408522, 23384.2869868986],
    [0.00000003312, 5.83174680245, 5331.3574437408],
    [0.00000003124, 5.44069658195, 6048.4411140864],
    [0.00000003813, 0.8027448743, 13517.8701062334],
    [0.00000003612, 3.68140265686, 5724.935697429],
    [0.00000002813, 1.68598843422, 2391.43681773],
    [0.00000002902, 5.30666239739, 8955.3418029094],
    [0.00000003225, 2.29832592489, 3312.163239232],
    [0.00000003863, 3.48188264725, 20618.0193585336],
    [0.00000002738, 5.49768261369, 149.5631971346],
    [0.00000002809, 4.76933217397, 1964.838626854],
    [0.00000002711, 2.69244730345, 3178.1457905676],
    [0.00000002711, 2.38275660721, 2648.454825473],
    [0.00000002743, 1.09492569851, 536.8045120954],
    [0.00000002821, 5.91845472246, 12964.300703391],
    [0.00000002716, 6.10377796874, 3973.396166013],
    [0.00000002487, 3.87703916286, 1861.7458526354],
    [0.00000002617, 2.65526535627, 8329.671610597],
    [0.00000002938, 5.68402398615, 6158.6474353058],
    [0.00000002336, 3.24847913311, 4672.6673142406],
    [0.00000002318, 1.69214259672, 3914.9572250346],
    [0.00000002371, 4.75067664712, 103.0927742186],
    [0.00000002963, 0.23381699914, 20597.2439630412],
    [0.0000000219, 6.18344448099, 3346.1353510072],
    [0.00000002444, 1.92547995169, 7799.9806455024],
    [0.00000002121, 4.87491216115, 9830.3890139878],
    [0.00000002532, 5.3955008727, 3863.1898447936],
    [0.00000002101, 2.84309138388, 3415.3940252671],
    [0.00000002176, 0.58632570025, 162.4666361322],
    [0.00000002106, 3.06229353931, 19800.9459562248],
    [0.00000002347, 3.90795942709, 3335.0895023924],
    [0.00000002031, 5.52057907797, 10021.9045904022],
    [0.00000001997, 2.77243710569, 13936.794505134],
    [0.00000002139, 5.40620646615, 266.6070417218],
    [0.00000002147, 0.089669876, 13358.9265884502],
    [0.00000001996, 2.62541669265, 20.7753954924],
    [0.00000001961, 4.88521794174, 3237.5196524812],
    [0.00000002216, 1.06829128652, 3320.257107301],
    [0.00000002131, 3.02112533027, 5625.3660415594],
    [0.00000002124, 3.68620121537, 5618.3198048614],
    [0.00000001938, 1.29006691721, 17924.9106998204],
    [0.00000002555, 4.91826220321, 6604.958782124],
    [0.00000002561, 2.10055088914, 7910.1869667218],
    [0.0000000182, 5.57528712663, 3351.2490920496],
    [0.00000001786, 5.77310414452, 3607.2194684216],
    [0.0000000178, 4.48010071981, 10818.1352869158],
    [0.00000002106, 5.75526661975, 13365.9728251482],
    [0.00000001987, 2.61151965233, 3546.797975137],
    [0.00000001799, 2.73192475257, 3360.96774609859],
    [0.00000001715, 1.50805385053, 1692.1656695024],
    [0.00000001752, 2.21455466761, 13119.72110282519],
    [0.00000001913, 3.32230688971, 6702.000248892],
    [0.00000001724, 1.43449979531, 4885.9664096786],
    [0.0000000205, 1.19293239093, 6660.4494579072],
    [0.00000001774, 2.18404386388, 6784.3176276182],
    [0.00000001722, 4.86031154305, 10014.7237330986],
    [0.00000001773, 2.09448668554, 3603.6963500726],
    [0.00000001606, 3.48105136801, 23141.5583829246],
    [0.00000001621, 5.73820120882, 4555.3474460204],
    [0.00000001579, 1.88769198841, 6298.3283211764],
    [0.0000000153, 5.1638156423, 76.2660712756],
    [0.00000001615, 3.24110713658, 3657.0042963564],
    [0.00000001576, 3.52622401575, 6688.3384004004],
    [0.00000002034, 2.63620520451, 16460.33352952499],
    [0.00000002025, 5.92907541624, 10021.7699697966],
    [0.00000001689, 4.41053057494, 5729.506447149],
    [0.00000001878, 4.53291044847, 3329.97576135],
    [0.0000000153, 4.76331644411, 7895.9598727202],
    [0.00000001529, 1.35289110986, 1581.959348283],
    [0.00000001807, 1.86212004697, 2693.601593385],
    [0.00000001855, 2.38561742394, 6843.6914895318],
    [0.00000001518, 3.9847615775, 6546.1597733642],
    [0.00000001389, 1.82099537095, 9779.1086761254],
    [0.00000001447, 2.35649936427, 6034.2140200848],
    [0.00000001386, 5.55304113895, 4775.7600884592],
    [0.00000001372, 1.07224580315, 12722.5524204852],
    [0.00000001423, 4.46530428193, 574.3447983348],
    [0.00000001424, 2.57162391016, 3399.9862886134],
    [0.0000000138, 5.76156315252, 16335.8378045366],
    [0.00000001338, 2.97604558638, 6127.6554505572],
    [0.00000001479, 4.74310691166, 12566.1516999828],
    [0.00000001706, 0.30579918494, 10551.528245194],
    [0.00000001281, 2.00285974432, 6677.6344247478],
    [0.0000000135, 0.78892333409, 853.196381752],
    [0.00000001534, 4.33326399444, 640.8776073822],
    [0.00000001247, 1.02503908468, 3024.2205570432],
    [0.00000001289, 1.92786975543, 3347.6586633978],
    [0.00000001243, 2.44217806237, 6684.8152820514],
    [0.00000001453, 1.74218016403, 3333.5661900018],
    [0.00000001675, 1.7969345633, 1118.7557921028],
    [0.00000001491, 2.59386711806, 2494.5295919486],
    [0.00000001293, 3.31710472549, 3407.0998356142],
    [0.00000001188, 4.92989260576, 22743.4093795164],
    [0.00000001329, 1.99426530402, 1228.9621133222],
    [0.00000001373, 2.5335498734, 5459.3762870782],
    [0.00000001183, 4.25338096667, 3344.4937620578],
    [0.00000001231, 2.50206227837, 4356.275444584],
    [0.00000001243, 2.6517626786, 74.7815985673],
    [0.00000001285, 4.34087881585, 3326.3853326982],
    [0.00000001119, 1.91321862491, 3281.2385647862],
    [0.00000001094, 5.50748655535, 3017.1070100424],
    [0.00000001259, 3.7765466283, 11236.57229942],
    [0.00000001285, 1.38335267684, 3077.528503327],
    [0.000000011, 1.17130732373, 6606.4432548323],
    [0.00000001115, 5.81275569652, 2675.8563815698],
    [0.0000000138, 5.70641426169, 2807.3983432562],
    [0.00000001256, 3.35479933251, 4039.8835749274],
    [0.00000001187, 2.41348693872, 10596.1820784342],
    [0.00000001052, 3.33521939538, 3304.5845600224],
    [0.00000001188, 5.84735836632, 3336.7310913418],
    [0.00000001072, 2.78383184435, 8270.2977486834],
    [0.00000001105, 3.03463252672, 3929.677253708],
    [0.00000001013, 3.52026711847, 8013.2797409404],
    [0.00000001079, 0.51857999039, 2814.4445799542],
    [0.00000000999, 4.7273400876, 533.2140834436],
    [0.00000001131, 0.52584038526, 6816.289933435],
    [0.00000001191, 0.6087429252, 2301.58581590939],
    [0.00000001313, 2.07273299121, 23539.7073863328],
    [0.00000000996, 4.03971126547, 16062.1845261168],
    [0.00000000954, 5.90340414098, 20206.141196331],
    [0.00000000993, 0.07132588892, 24150.080051345],
    [0.00000001051, 2.2209653487, 3980.5097130138],
    [0.00000001089, 1.25512213569, 5938.234792867],
    [0.00000000912, 2.54221161167, 433.7117378768],
    [0.00000001249, 0.60003625956, 16173.3711684044],
    [0.00000001027, 4.95999945094, 19676.4502312364],
    [0.00000001108, 4.3420944816, 3339.1279539915],
    [0.00000001188, 6.21563747433, 2679.3794999188],
    [0.00000000849, 0.82548606454, 2597.6223661672],
    [0.00000001145, 4.48151980872, 19402.7969528166],
    [0.00000000948, 1.30280088857, 8273.8208670324],
    [0.00000001016, 5.1446481583, 1596.1864422846],
    [0.00000000832, 5.6062365203, 3340.19235060619],
    [0.00000001035, 4.71893106874, 419.4846438752],
    [0.00000000903, 0.45419000582, 12995.2253778368],
    [0.00000001089, 0.51294377637, 11250.7993934216],
    [0.0000000084, 5.30858028008, 26084.0218062162],
    [0.0000000099, 2.06776368865, 7255.5696517344],
    [0.00000000808, 6.25630819993, 15508.6151232744],
    [0.00000000806, 3.09007612135, 5415.6573747732],
    [0.00000000782, 4.62274599734, 2547.8375382324],
    [0.00000000963, 2.10680539916, 6456.8800576977],
    [0.00000000778, 3.56602161857, 12721.572099417],
    [0.00000000873, 5.09097164784, 2540.7913015344],
    [0.00000000772, 3.08101797047, 11081.2192102886],
    [0.00000000965, 2.33106703115, 18454.601664915],
    [0.00000000859, 4.14788214122, 6438.4962494256],
    [0.00000001012, 4.4501166454, 3316.733988952],
    [0.00000000906, 4.29336078401, 3344.5445799629],
    [0.00000000741, 2.6144640358, 2284.7536148596],
    [0.0000000079, 6.03436225041, 12509.2533250472],
    [0.00000000738, 0.52092422137, 18052.9295431578],
    [0.00000000737, 4.11165247543, 3760.097070575],
    [0.00000000727, 3.28066632751, 3510.1926098328],
    [0.00000001006, 0.45037465289, 27490.6924780448],
    [0.00000000923, 2.78717931388, 1332.0548875408],
    [0.00000000756, 0.86881841787, 1545.3539829788],
    [0.00000000774, 3.715355419, 6571.0185321802],
    [0.000000009, 2.74944190055, 316.3918696566],
    [0.00000000704, 1.89617185328, 13362.432453147],
    [0.00000000701, 2.21328293796, 20995.3929664494],
    [0.00000000701, 3.926894387, 13362.4669604514],
    [0.00000000695, 5.52658147215, 3364.4908644476],
    [0.00000000764, 1.88253040972, 5732.0492444298],
    [0.00000000693, 0.34849213821, 5835.1420186484],
    [0.00000000698, 1.79132650081, 206.1855484372],
    [0.00000000687, 0.11649928911, 13760.5987102074],
    [0.00000000827, 0.49766945172, 3376.6402933772],
    [0.00000000686, 0.23965591265, 2409.249339848],
    [0.00000000672, 0.51352450554, 25685.872802808],
    [0.00000000699, 5.9016759508, 19004.6479494084],
    [0.00000000647, 3.01091875955, 5223.6939198022],
    [0.00000000643, 4.88507402785, 11766.2632645146],
    [0.00000000723, 3.28296530537, 4142.976349146],
    [0.0000000066, 4.2733439383, 1214.7350193206],
    [0.00000000675, 0.48874492682, 5408.5438277724],
    [0.00000000809, 3.13310075522, 18984.2926300096],
    [0.00000000646, 3.63004914186, 7107.8230442756],
    [0.00000000831, 4.49449658957, 3341.0325027934],
    [0.0000000068, 0.16949964513, 110.2063212194],
    [0.00000000592, 6.03272224596, 20809.4676246452],
    [0.00000000627, 4.93438097728, 9872.2740829648],
    [0.00000000698, 1.45709305452, 3377.217792004],
    [0.00000000583, 4.01887095237, 664.75604513],
    [0.00000000591, 4.01381288194, 19406.6782881746],
    [0.00000000571, 1.20823284619, 5621.8601768626],
    [0.0000000068, 4.72905586557, 8116.372515159],
    [0.00000000739, 3.19765996917, 9380.9596727172],
    [0.00000000571, 5.46064659057, 5621.8256695582],
    [0.00000000702, 0.14107083764, 6923.9534573736],
    [0.00000000598, 3.05986754375, 3341.0423098265],
    [0.00000000601, 2.17944973698, 7270.2896804078],
    [0.00000000572, 0.42001145821, 15110.4661198662],
    [0.00000000655, 1.08706089359, 3169.9395560806],
    [0.00000000582, 1.68224967199, 26087.9031415742],
    [0.00000000543, 2.42716241058, 170.6728706192],
    [0.00000000543, 1.68460678113, 11780.4903585162],
    [0.00000000533, 2.63982684952, 2277.7073781616],
    [0.0000000055, 2.54220679987, 7380.4960016272],
    [0.00000000576, 1.69042028754, 3384.3313390048],
    [0.00000000535, 5.0127922346, 1375.7737998458],
    [0.00000000579, 5.99182453047, 2149.6885348242],
    [0.00000000598, 0.75754342787, 3340.1825435731],
    [0.00000000575, 1.33793171924, 3296.8935143948],
    [0.00000000689, 0.02993986536, 22345.2603761082],
    [0.00000000526, 6.14212516186, 13149.1506113612],
    [0.0000000054, 5.54137118955, 8646.0634802536],
    [0.00000000528, 2.74183495775, 3826.5844794894],
    [0.00000000689, 6.28205551764, 12295.9542296092],
    [0.00000000499, 0.25665224668, 2142.6422981262],
    [0.00000000498, 5.91370528026, 6460.8122109608],
    [0.00000000588, 3.39977690249, 3329.5667264359],
    [0.00000000507, 0.63367870048, 20735.83216142559],
    [0.0000000059, 3.87951788923, 9065.5481241288],
    [0.00000000509, 2.59333214746, 3877.4169387952],
    [0.00000000486, 4.01113864377, 23937.856389741],
    [0.00000000541, 1.55072392536, 2221.856634597],
    [0.00000000482, 0.00200643783, 10235.1363755374],
    [0.00000000474, 4.14503805378, 3113.1362939108],
    [0.00000000523, 2.89171162726, 6040.3472460174],
    [0.00000000458, 4.08131432844, 1162.4747044078],
    [0.00000000493, 2.98933582802, 1039.0266107904],
    [0.00000000489, 4.88201647585, 5511.636601991],
    [0.00000000537, 1.24870344441, 48835.19385644859],
    [0.00000000585, 5.5338491934, 4981.9456368964],
    [0.00000000462, 5.38999453893, 15664.03552270859],
    [0.00000000531, 1.22287288928, 10721.108428327],
    [0.0000000044, 4.69966067585, 799.8211251654],
    [0.00000000588, 5.15076051189, 3873.8265101434],
    [0.00000000465, 5.49236978535, 3342.0968994081],
    [0.00000000545, 5.91813092143, 1478.8665740644],
    [0.0000000044, 2.28287871244, 12310.1813236108],
    [0.00000000436, 0.12478564862, 956.2891559706],
    [0.00000000573, 3.86388572602, 26482.1708096244],
    [0.00000000429, 1.20474317285, 28.4491874678],
    [0.00000000435, 3.75437730899, 5195.2447323344],
    [0.00000000457, 1.45606713663, 5636.070017212],
    [0.00000000553, 5.30628175145, 2766.267628365],
    [0.00000000494, 0.63303483918, 3274.1250177854],
    [0.0000000053, 3.18458612574, 8535.8571590342],
    [0.00000000535, 1.89165024367, 9866.4168806652],
    [0.00000000433, 0.33270291162, 6665.9723822146],
    [0.00000000404, 4.6793996459, 4825.544916394],
    [0.00000000402, 3.25727658426, 5820.9149246468],
    [0.00000000415, 1.41915166067, 21947.1113727],
    [0.00000000414, 3.32843373219, 8859.3625756916],
    [0.00000000403, 1.68400791606, 9588.1255422226],
    [0.00000000399, 0.93465630912, 2295.4575905122],
    [0.00000000402, 0.85364636108, 29026.48522950779],
    [0.00000000494, 4.57792960199, 8542.970706035],
    [0.00000000413, 2.60545132222, 38.1330356378],
    [0.00000000413, 5.44081623497, 4407.1079038898],
    [0.00000000404, 5.33168348188, 3189.5647568569],
    [0.00000000385, 1.90313951519, 10020.8569590312],
    [0.00000000454, 1.18358809702, 10610.9021071076],
    [0.00000000381, 4.90212003667, 19146.7592661418],
    [0.00000000415, 3.07892141478, 11216.284290324],
    [0.00000000378, 0.19461412344, 2067.9314010726],
    [0.00000000418, 1.14626975196, 6643.0918177618],
    [0.00000000426, 4.33863084563, 220.4126424388],
    [0.00000000412, 0.02314567339, 3192.5337022735],
    [0.00000000391, 4.75902617217, 6414.6178116778],
    [0.00000000399, 1.3770857398, 9654.612951137],
    [0.00000000381, 2.74120772781, 1854.6323056346],
    [0.00000000378, 4.16366866018, 13553.8979729108],
    [0.00000000409, 3.12117409635, 3723.4917052708],
    [0.00000000379, 5.87578711682, 6357.7194367422],
    [0.00000000375, 3.29175394061, 31022.7531708562],
    [0.00000000358, 3.99134138048, 8958.9322315612],
    [0.0000000039, 2.01175211992, 1903.4368125012],
    [0.00000000373, 1.27018251531, 2111.6503133776],
    [0.00000000493, 4.66294641806, 1435.1476617594],
    [0.00000000379, 4.08720452061, 10706.8813343254],
    [0.00000000461, 1.9012230147, 25287.7237993998],
    [0.00000000364, 3.2523113684, 5095.6750764648],
    [0.00000000382, 2.18684874688, 16276.463942623],
    [0.00000000359, 2.29096599931, 28628.3362260996],
    [0.00000000362, 4.15084528423, 6696.4773245846],
    [0.00000000374, 5.78780163439, 3490.1756238344],
    [0.00000000386, 4.73230339383, 3981.490034082],
    [0.00000000344, 5.7915671479, 26880.3198130326],
    [0.00000000368, 3.44405073824, 15.252471185],
    [0.0000000041, 1.76294940448, 6709.6740408674],
    [0.00000000339, 1.71242500987, 224.3447957019],
    [0.00000000373, 2.71286157688, 3472.1543883862],
    [0.00000000334, 1.10569460106, 59.3738619136],
    [0.00000000394, 4.02046774116, 2075.0449480734],
    [0.00000000402, 3.27520695853, 931.3630868518],
    [0.00000000318, 3.2889252478, 9485.032768004],
    [0.00000000319, 4.05344391333, 3450.8187479192],
    [0.00000000341, 6.08567978892, 17085.9586657222],
    [0.00000000378, 0.71609301686, 3209.0704650134],
    [0.00000000326, 4.58257191106, 8982.810669309],
    [0.00000000369, 6.17228742886, 8671.9698704406],
    [0.00000000308, 1.01924467785, 18606.4989460002],
    [0.0000000037, 2.84011243059, 4392.8808098882],
    [0.00000000303, 5.00239879717, 2810.9387152574],
    [0.00000000303, 2.97162741204, 2810.904207953],
    [0.00000000419, 2.798305624, 5106.3790521174],
    [0.00000000358, 1.15955325186, 4076.4889402316],
    [0.0000000036, 5.8322612331, 26724.8994135984],
    [0.00000000298, 5.57160706753, 3041.4860324306],
    [0.00000000298, 3.06970285022, 11670.2840372968],
    [0.00000000388, 5.01197738185, 12323.4230960088],
    [0.00000000336, 4.60208332758, 9602.3526362242],
    [0.00000000371, 2.23508025241, 4996.172730898],
    [0.000000003, 6.04069385215, 9499.2598620056],
    [0.00000000345, 1.74260482164, 5617.9107699473],
    [0.00000000302, 3.0112734994, 7483.5887758458],
    [0.00000000289, 0.39479288685, 2412.772458197],
    [0.00000000289, 2.21430640344, 11140.5930722022],
    [0.0000000033, 5.81605457596, 4246.0691233646],
    [0.00000000394, 2.1222910724, 6475.0393049624],
    [0.00000000301, 5.26147877814, 9945.5712088238],
    [0.00000000338, 4.94717046909, 5625.7750764735],
    [0.00000000372, 5.469686628, 3561.0250691386],
    [0.00000000279, 0.54063870001, 3226.2133197864],
    [0.00000000291, 5.21021494024, 13171.0014406876],
    [0.00000000384, 3.23921380878, 10022.8176011676],
    [0.00000000309, 3.17514941939, 14047.4937610252],
    [0.00000000273, 1.68203034215, 4253.1826703654],
    [0.00000000272, 0.11218647217, 7314.0085927128],
    [0.00000000281, 5.15132055967, 2825.1485556068],
    [0.00000000292, 3.33720586058, 9468.267877257],
    [0.00000000316, 1.41719074976, 589.0648270082],
    [0.00000000264, 0.4884559473, 16699.53901514999],
    [0.00000000266, 1.69694779915, 647.0108333148],
    [0.00000000318, 2.47072726153, 8436.2875031646],
    [0.0000000026, 2.54459932529, 20.3553193988],
    [0.00000000275, 2.78608579994, 2970.9126107594],
    [0.00000000295, 5.96367554548, 4025.6564809258],
    [0.00000000268, 3.01034973031, 6518.7582172674],
    [0.00000000259, 5.20888482695, 7366.2689076256],
    [0.00000000298, 2.71010678192, 6652.7756659318],
    [0.00000000276, 0.785451083, 3735.238311759],
    [0.00000000305, 6.19137255377, 6677.3435180416],
    [0.00000000265, 3.25145629239, 24889.5747959916],
    [0.0000000026, 3.99612605351, 2171.0241752912],
    [0.00000000252, 4.14773813625, 5642.1982426092],
    [0.00000000254, 1.38470256851, 846.0828347512],
    [0.00000000258, 2.03261985834, 2089.782230399],
    [0.00000000298, 3.81212222628, 28230.18722269139],
    [0.00000000241, 2.96550398155, 27682.1407441564],
    [0.00000000259, 4.79545870271, 6657.3464156518],
    [0.00000000238, 1.18977479528, 3171.0322435668],
    [0.00000000256, 1.01427800277, 568.8218740274],
    [0.00000000236, 5.56425829084, 14.2270940016],
    [0.00000000304, 3.81556245925, 1190.9238918756],
    [0.00000000237, 1.37222961867, 2277.2983432475],
    [0.00000000239, 2.47752611026, 5430.3946570988],
    [0.00000000234, 4.34929504798, 6675.7019290922],
    [0.00000000239, 0.14012746335, 3742.284548457],
    [0.00000000286, 5.04045301355, 5607.6158292088],
    [0.00000000305, 4.5973907966, 6685.1061887576],
    [0.00000000254, 5.03693878366, 1905.4647649404],
    [0.00000000323, 1.67390215145, 4922.5717749828],
    [0.00000000232, 4.82565548677, 9070.1188738488],
    [0.00000000236, 2.40662610715, 3620.3989310522],
    [0.0000000026, 5.72282468723, 17468.8551979454],
    [0.00000000259, 6.15179402778, 16706.585251848],
    [0.00000000263, 0.63922292958, 2008.557539159],
    [0.000000003, 3.78527265088, 34363.365597556],
    [0.00000000226, 1.86970344963, 6418.1409300268],
    [0.00000000239, 0.046169974, 13362.3823964964],
    [0.00000000241, 4.85896907298, 14158.7477136156],
    [0.00000000225, 1.70179250908, 18451.07854656599],
    [0.00000000288, 2.26316945288, 6621.850991486],
    [0.00000000231, 2.19861265305, 3936.7908007088],
    [0.00000000251, 5.51232121883, 3416.8784979754],
    [0.00000000245, 3.30613942274, 1197.9701285736],
    [0.00000000253, 4.54308131689, 2285.1626497737],
    [0.00000000225, 5.50822507089, 4936.7988689844],
    [0.00000000249, 1.06089727346, 3313.210870603],
    [0.00000000309, 6.21936675838, 16304.9131300908],
    [0.00000000244, 1.94855224181, 3.5904286518],
    [0.00000000287, 5.70461951656, 792.7748884674],
    [0.00000000254, 5.34446995416, 5401.4302807716],
    [0.00000000263, 1.49663212332, 6364.832983743],
    [0.00000000223, 2.66825139116, 31968.9486527994],
    [0.00000000222, 2.48370132727, 5355.2358814886],
    [0.0000000022, 5.20799024654, 23017.0626579362],
    [0.00000000215, 2.72743996418, 6740.5987153132],
    [0.00000000218, 1.30797197521, 29822.7832363242],
    [0.0000000027, 0.90714939427, 6155.057006654],
    [0.00000000216, 4.73975263349, 6679.7403806913],
    [0.00000000211, 3.72756562629, 10042.6126755918],
    [0.00000000211, 2.61999755641, 10124.930054318],
    [0.00000000293, 6.07059383381, 14061.7208550268],
    [0.00000000219, 2.98472846458, 131.5419616864],
    [0.0000000021, 5.27496906319, 13355.3361597984],
    [0.00000000259, 1.2526730583, 2641.3412784722],
    [0.00000000208, 3.30241021109, 6850.8050365326],
    [0.00000000226, 5.48438086246, 7203.8022714934],
    [0.00000000243, 2.44748800604, 3311.18291816379],
    [0.00000000208, 1.13500579457, 5888.4499649322],
    [0.00000000251, 4.67012983729, 6666.997759398],
    [0.00000000227, 1.59926413307, 10001.061884607],
    [0.00000000264, 3.72622435628, 6747.712262314],
    [0.00000000216, 0.34122804918, 6686.747777707],
    [0.0000000026, 3.67749190896, 6645.1969867222],
    [0.00000000209, 4.31928920378, 3337.8609160888],
    [0.00000000218, 4.08068730999, 3378.7454623376],
    [0.00000000275, 1.64274205426, 2011.1003364398],
    [0.00000000204, 0.73237459784, 3.9321532631],
    [0.00000000219, 0.88584017263, 19513.9835951042],
    [0.00000000205, 2.60851826933, 2771.7905526724],
    [0.00000000215, 2.99299817517, 10824.2012025456],
    [0.00000000249, 0.99914444136, 5753.3848848968],
    [0.00000000225, 0.23309143434, 4782.87363546],
    [0.00000000275, 0.86215660461, 8749.1562544722],
    [0.00000000201, 2.87118854159, 21548.9623692918],
    [0.00000000246, 3.34468800742, 3333.9287628257],
    [0.00000000203, 4.11410443276, 31570.7996493912],
    [0.00000000202, 4.96805650734, 8166.1573430938],
    [0.00000000232, 2.69372584349, 5989.0672521728],
    [0.00000000214, 4.83852070026, 6681.6449294932],
    [0.00000000258, 2.66551831451, 1062.9050485382],
    [0.00000000197, 0.55202541352, 735.8765135318],
    [0.00000000256, 2.76274941586, 2480.302497947],
    [0.00000000216, 4.02506717011, 3133.9116894032],
    [0.00000000193, 1.52645682146, 949.1756089698],
    [0.00000000209, 0.67348618655, 13892.1406718938],
    [0.0000000022, 1.52502617699, 6660.8695340008],
    [0.00000000223, 1.09348882524, 6148.010769956],
    [0.00000000192, 2.90571322264, 8799.988713778],
    [0.00000000243, 3.36420301442, 8965.9784682592],
    [0.00000000206, 5.11175800472, 4140.4335518652],
    [0.00000000189, 1.06641624209, 9374.8264467846],
    [0.0000000024, 5.92078519032, 13362.517017102],
    [0.00000000248, 5.79997873732, 15806.146839442],
    [0.00000000193, 3.19008521814, 6756.0064519669],
    [0.00000000237, 4.11979030463, 22487.3716928416],
    [0.00000000218, 0.84212090761, 6717.252720077],
    [0.000000002, 2.4310084663, 10018.2468514476],
    [0.00000000199, 5.81238461796, 4289.7880356696],
    [0.00000000214, 5.95026024979, 6680.804777306],
    [0.00000000192, 3.06285109033, 32765.2466596158],
    [0.00000000229, 1.68884404323, 11614.4332937322],
    [0.00000000185, 3.13072183492, 3253.30422216],
    [0.00000000246, 2.58151525126, 1795.258443721],
    [0.00000000187, 4.06797969837, 14577.1847261198],
    [0.00000000185, 0.96747889626, 2604.735913168],
    [0.00000000184, 1.46731725339, 1437.1756141986],
    [0.00000000186, 2.55094700069, 3188.7151456146],
    [0.00000000211, 4.23522784526, 16703.07938715119],
    [0.00000000196, 2.80582160764, 2796.6943676036],
    [0.00000000198, 5.9237206756, 4133.3873151672],
    [0.00000000238, 2.30957041178, 1879.5583747534],
    [0.00000000224, 3.13550652378, 3613.2853840514],
    [0.00000000223, 1.81801741599, 3184.2117061974],
    [0.00000000199, 3.64983703995, 4271.9755135516],
    [0.00000000181, 2.71721121316, 4186.695261451],
    [0.00000000184, 2.03051030984, 6674.1786167016],
    [0.00000000182, 1.5443144281, 9947.0556815321],
    [0.00000000179, 4.38762678121, 9886.772200064],
    [0.00000000181, 1.80044971979, 6717.8302187038],
    [0.0000000019, 4.97714900529, 6670.5881880498],
    [0.00000000247, 5.77972128678, 29424.634232916],
    [0.00000000194, 5.90745451439, 6705.1032911474],
    [0.00000000224, 5.61893896091, 227.476132789],
    [0.00000000182, 2.77233344458, 6887.4104018368],
    [0.00000000224, 1.94094757956, 8226.5788363784],
    [0.00000000181, 4.6138108133, 3361.9480671668],
    [0.00000000203, 5.24659800837, 7586.6815500644],
    [0.00000000183, 5.23826533455, 6578.132079181],
    [0.00000000207, 0.88292186428, 10156.9023601348],
    [0.00000000232, 0.75375986797, 3232.9489027612],
    [0.00000000179, 5.89794151802, 4452.2546718018],
    [0.00000000177, 6.16223629155, 3547.3131639964],
    [0.00000000177, 0.1929289803, 401.6721217572],
    [0.00000000173, 3.898140641, 6019.9919266186],
    [0.00000000172, 2.42933586666, 6944.3087767724],
    [0.00000000201, 6.18392570315, 6947.8318951214],
    [0.00000000183, 5.82189570737, 8962.438096258],
    [0.00000000189, 2.71231990816, 742.9900605326],
    [0.00000000172, 3.86810071059, 10028.9508271002],
    [0.00000000188, 5.22462530948, 2125.8774073792],
    [0.00000000196, 1.883885699, 5032.7780962022],
    [0.00000000209, 5.78130707501, 3343.3639373108],
    [0.00000000167, 6.26758992296, 15849.865751747],
    [0.00000000189, 2.38894304278, 3212.5935833624],
    [0.00000000208, 5.62485439431, 31172.650645983],
    [0.0000000017, 1.0734640106, 20426.571092422],
    [0.00000000183, 5.21160560654, 27832.0382192832],
    [0.00000000181, 2.19756653553, 16703.0448798468],
    [0.00000000214, 1.66101921272, 21265.5231265202],
    [0.00000000165, 2.10517924574, 6688.2710900976],
    [0.00000000172, 0.85495655009, 14591.4118201214],
    [0.00000000164, 1.68898542913, 3468.6312700372],
    [0.00000000183, 1.56948199057, 8962.4726035624],
    [0.00000000191, 5.54553650068, 2806.9893083421],
    [0.00000000162, 4.06699160265, 5209.471826336],
    [0.00000000165, 3.44003333876, 14421.8316369884],
    [0.00000000163, 2.42152585351, 6314.0005244372],
    [0.00000000189, 0.57681608522, 2973.3880977374],
    [0.00000000169, 2.86190807726, 5490.300961524],
    [0.00000000174, 1.69333072403, 1744.493294718],
    [0.00000000224, 2.35886332922, 9638.9407478762],
    [0.00000000207, 3.13737248079, 3336.6802734367],
    [0.00000000221, 3.14807587279, 11610.9101753832],
    [0.00000000158, 5.87599422932, 4606.1799053262],
    [0.00000000166, 4.61834424167, 9175.7544453482],
    [0.00000000162, 5.40045489036, 23.8784377478],
    [0.00000000158, 5.57047764661, 4503.0871311076],
    [0.00000000156, 3.08339691033, 3448.2759506384],
    [0.00000000202, 2.56469307457, 7321.1221397136],
    [0.00000000164, 1.10347159072, 3710.3122426402],
    [0.00000000158, 3.65995745934, 6997.6167230562],
    [0.00000000169, 1.85985317117, 1329.51209026],
    [0.00000000211, 1.66624816725, 3304.0070613956],
    [0.00000000206, 1.81572746145, 1596.1191319818],
    [0.00000000169, 0.46310427277, 17101.2111369072],
    [0.00000000159, 5.73384451559, 1265.5674786264],
    [0.00000000159, 0.92643196778, 4001.8453534808],
    [0.00000000189, 2.7416385092, 2910.4911174748],
    [0.00000000181, 5.48699984659, 3319.2767862328],
    [0.00000000156, 5.9546211847, 8584.6616659008],
    [0.00000000158, 3.38732507447, 8742.0427074714],
    [0.00000000171, 3.11406750626, 5621.9102335132],
    [0.00000000199, 2.86370198218, 10025.4277087512],
    [0.00000000173, 4.73384838991, 9389.0535407862],
    [0.0000000016, 3.06861532268, 1612.9513330316],
    [0.00000000203, 1.71629299113, 699.2711482276],
    [0.00000000198, 0.56267868345, 15265.8865193004],
    [0.00000000186, 2.44573687199, 2814.8536148683],
    [0.00000000167, 0.4441794226, 37895.4262903674],
    [0.00000000152, 5.0861661053, 3322.7999045818],
    [0.00000000162, 2.58982908935, 1883.0814931024],
    [0.00000000178, 4.58774508034, 6685.1570066627],
    [0.00000000191, 4.12771141768, 9911.63095888],
    [0.00000000185, 4.32284898739, 323.5054166574],
    [0.00000000199, 1.83524172935, 3436.5916539176],
    [0.00000000199, 6.00292619279, 4427.3959129858],
    [0.00000000153, 3.4644766959, 22324.9050567094],
    [0.00000000171, 3.52256446633, 5621.7756129076],
    [0.00000000165, 3.32970937124, 1272.6810256272],
    [0.00000000149, 0.13370088791, 36.0278666774],
    [0.00000000149, 1.23280447264, 4193.8088084518],
    [0.00000000156, 0.13018524921, 11925.2740926006],
    [0.00000000146, 1.24102730441, 3372.5847325166],
    [0.00000000154, 5.63537863362, 3185.2593375684],
    [0.00000000197, 3.2336418844, 3774.3241645766],
    [0.0000000018, 3.47485722477, 8564.306346502],
    [0.00000000185, 2.18248214016, 802.3639224462],
    [0.00000000145, 2.62035460481, 3368.0139827966],
    [0.0000000018, 6.01236697222, 6691.8615187494],
    [0.00000000148, 2.5171017883, 3262.8618827159],
    [0.00000000151, 4.17118896078, 16894.5103996106],
    [0.00000000185, 3.0393966835, 3354.8395207014],
    [0.00000000143, 3.37267915445, 3468.5639597344],
    [0.0000000016, 2.1670595973, 0.9803210682],
    [0.0000000019, 1.63240538938, 2324.9494088156],
    [0.0000000014, 1.27592043896, 6549.6828917132],
    [0.00000000186, 1.44849264278, 1015.6630178842],
    [0.00000000141, 4.19208049402, 5813.291189322],
    [0.00000000153, 5.97405255778, 3568.0885594888],
    [0.00000000136, 0.45455359025, 3193.8007401762],
    [0.00000000188, 0.98977442882, 2538.2485042536],
    [0.00000000157, 3.32117477144, 3181.6689089166],
    [0.00000000164, 1.67705754742, 2751.5475996916],
    [0.00000000134, 5.26327877742, 13212.8865096646],
    [0.00000000184, 0.73082474043, 369.6998159404],
    [0.00000000145, 5.54086212771, 3152.68727893721],
    [0.00000000139, 3.30464120245, 6151.5166346528],
    [0.00000000132, 0.96753793729, 3487.4241132234],
    [0.00000000148, 1.55321724063, 7696.8878712838],
    [0.0000000014, 5.390007578, 2945.9865416406],
    [0.00000000155, 4.35207037526, 4005.3684718298],
    [0.00000000142, 5.13441372991, 1641.3332101966],
    [0.00000000131, 2.48606821423, 1353.3905280078],
    [0.00000000131, 2.18754536881, 1765.7666254176],
    [0.00000000133, 3.0130058204, 3283.7140517642],
    [0.00000000177, 2.37558492362, 11346.7786206394],
    [0.00000000145, 0.79525636457, 2281.2477501628],
    [0.00000000133, 5.96263652624, 34513.2630726828],
    [0.00000000165, 1.32559153826, 6510.5519827804],
    [0.00000000132, 4.31118469609, 1971.9521738548],
    [0.00000000176, 3.17539133688, 6701.5801727984],
    [0.0000000014, 1.18723558164, 1461.0540519464],
    [0.00000000128, 6.07261046225, 3362.4632560262],
    [0.00000000139, 5.33541181199, 6151.5511419572],
    [0.00000000143, 1.04060603784, 3351.6581269637],
    [0.00000000138, 1.96009952022, 2014.6234547888],
    [0.00000000127, 2.12310260285, 2917.5373541728],
    [0.00000000142, 0.29094317859, 3212.6608936652],
    [0.00000000128, 0.4997445644, 10264.5658840734],
    [0.00000000125, 1.62548810323, 10191.4174632324],
    [0.00000000128, 3.55358985291, 3223.2925584796],
    [0.0000000014, 5.87379732521, 6382.0984591304],
    [0.00000000129, 2.90428606882, 6812.766815086],
    [0.00000000127, 4.03101399507, 10448.4354709754],
    [0.00000000128, 3.23265469, 4576.6880870228],
    [0.00000000124, 2.02283056331, 6724.9437657046],
    [0.00000000134, 0.19295362623, 3130.8364496108],
    [0.00000000145, 5.04767049759, 2281.2132428584],
    [0.00000000143, 4.45744983982, 7100.7094972748],
    [0.00000000133, 5.00404182123, 11883.5831327348],
    [0.00000000124, 0.73925895836, 1485.9801210652],
    [0.00000000123, 0.47283015475, 3347.2960905739],
    [0.00000000137, 5.73370922615, 5244.049239201],
    [0.00000000152, 5.0146445546, 3358.4249488178],
    [0.00000000122, 1.37003015612, 3370.0419352358],
    [0.00000000143, 1.95740753086, 2921.6880277992],
    [0.00000000123, 3.94139290312, 4957.0868780804],
    [0.0000000013, 0.90844304292, 3427.9206312396],
    [0.00000000135, 3.56996218538, 3229.4257844122],
    [0.00000000143, 5.3022576787, 14128.2427712456],
    [0.00000000134, 2.47836558803, 7167.1969061892],
    [0.0000000015, 5.89116199733, 966.9708774356],
    [0.00000000123, 3.58787674774, 3318.7615973734],
    [0.00000000153, 0.37199746202, 6533.1461289733],
    [0.00000000145, 1.73326841661, 6637.5059410946],
    [0.00000000133, 3.27553306809, 11876.469585734],
    [0.00000000119, 5.15087396729, 15636.566656309],
    [0.00000000117, 3.70999224131, 3343.1552239806],
    [0.00000000115, 5.99541570797, 11986.6759069534],
    [0.00000000152, 5.6666233996, 6530.1771835567],
    [0.00000000123, 0.05231448642, 9801.4246376606],
    [0.0000000013, 1.4237792604, 16063.164847185],
    [0.0000000012, 4.19579234337, 604.8497407048],
    [0.00000000126, 1.38788085609, 169.580183133],
    [0.00000000122, 0.18785107006, 18849.2275499742],
    [0.00000000113, 4.67731144918, 24491.4257925834],
    [0.00000000122, 1.21803689218, 3067.9394693482],
    [0.00000000118, 3.92389195187, 2963.238818784],
    [0.00000000137, 0.80076862963, 3123.7902129128],
    [0.00000000124, 0.77274469912, 12465.5344127422],
    [0.00000000132, 4.73888023892, 2267.003402509],
    [0.00000000122, 3.66231014052, 8756.269801473],
    [0.00000000113, 3.74955221887, 21393.5419698576],
    [0.00000000153, 5.00596002145, 15906.7641266826],
    [0.00000000109, 1.4639407844, 2854.6403739102],
    [0.00000000125, 6.00744459186, 1442.2612087602],
    [0.0000000014, 0.64532646558, 13532.0298899322],
    [0.00000000108, 2.11691804278, 43.718912305],
    [0.0000000013, 1.4318591196, 3370.1042450032],
    [0.00000000133, 2.31239626151, 9072.6616711296],
    [0.00000000107, 5.68864833782, 4878.8528626778],
    [0.00000000116, 3.91262234002, 11904.9187732018],
    [0.00000000106, 1.99989592271, 3497.0131472022],
    [0.00000000106, 5.79020088316, 1.4844727083],
    [0.00000000105, 1.79751699456, 3517.3061568336],
    [0.0000000013, 0.80396347034, 3397.5108016354],
    [0.00000000107, 5.29449090921, 10.6366653498],
    [0.00000000137, 0.47037516401, 13575.7488022372],
    [0.00000000104, 5.03145022037, 1751.5222777638],
    [0.00000000146, 2.57659804831, 3308.640120883],
    [0.00000000103, 3.29589452622, 4379.6390374902],
    [0.00000000104, 0.77903634693, 1751.5567850682],
    [0.00000000118, 4.11892224522, 10927.2939767642],
    [0.00000000106, 2.25714927822, 13207.029307365],
    [0.00000000126, 1.10289326962, 6680.7949702729],
    [0.00000000105, 1.41449747957, 10081.211142013],
    [0.0000000011, 6.16072219971, 3338.069629419],
    [0.00000000113, 0.61947991056, 13421.8235687128],
    [0.00000000139, 2.21345603147, 1954.7171503636],
    [0.00000000102, 3.81767069895, 6670.1791531357],
    [0.00000000101, 3.44583422545, 1505.28780909299],
    [0.00000000105, 2.46134952447, 5525.8636959926],
    [0.00000000119, 5.64454862995, 8425.7181481176],
    [0.00000000101, 1.87446179141, 9161.5273513466],
    [0.00000000111, 5.46183253107, 7214.4389368432],
    [0.00000000123, 0.14056284625, 16489.763038061],
    [0.00000000128, 0.00452525697, 2185.2512692928],
    [0.00000000106, 6.2022517933, 3717.9860346156],
    [0.00000000099, 1.70554147455, 1655.5603041982],
    [0.000000001, 1.76373681853, 3002.3697277168],
    [0.00000000101, 0.55693458655, 3337.1566186536],
    [0.00000000101, 0.56441794685, 30774.5016425748],
    [0.00000000098, 1.93983799659, 5562.4690612968],
    [0.0000000013, 5.65255471249, 2735.762685995],
    [0.00000000125, 6.18575288406, 9698.331863442],
    [0.000000001, 2.35767934317, 3337.0720546986],
    [0.000000001, 3.76317527562, 3344.152798701],
    [0.00000000105, 5.33897491215, 5096.0841113789],
    [0.00000000103, 1.24189801298, 1385.8952763362],
    [0.00000000101, 1.42727612221, 37455.7264959744],
    [0.00000000096, 2.55328478399, 4466.4817658034],
    [0.00000000097, 5.8677912741, 5220.1708014532],
    [0.00000000101, 2.61513508379, 16858.41522263039],
    [0.00000000107, 4.23943588615, 8823.8671515258],
    [0.000000001, 4.38845221965, 3337.106562003],
    [0.000000001, 1.73240240188, 3344.11829139661],
    [0.00000000101, 3.51764169063, 4694.0029547076],
    [0.00000000096, 3.16895015703, 12825.6451947038],
    [0.00000000101, 6.24060604565, 2942.5307335944],
    [0.00000000103, 1.09500325425, 12089.768681172],
    [0.00000000106, 5.57931664756, 39048.3225096072],
    [0.00000000126, 3.4052173855, 6681.6547365263],
    [0.00000000105, 2.52404371984, 1755.062649765],
    [0.00000000115, 6.10031030713, 3145.6410422392],
    [0.00000000092, 5.06385191401, 5085.1057214178],
    [0.00000000097, 1.11670836674, 3341.7930693519],
    [0.00000000092, 5.83209800268, 6682.7093261079],
    [0.00000000121, 2.39411154886, 18208.349942592],
    [0.0000000011, 2.51677822824, 1045.1548361876],
    [0.00000000091, 1.07173725022, 927.8399685028],
    [0.00000000096, 3.60155667418, 13363.4300278674],
    [0.00000000097, 5.34224904711, 7636.4663779992],
    [0.00000000094, 1.20811080231, 9495.6694333538],
    [0.0000000009, 4.17568982529, 0.0673103028],
    [0.00000000097, 3.20862890174, 5298.337506553],
    [0.00000000092, 3.20029831258, 4403.517475238],
    [0.0000000009, 3.79900428724, 685.044054226],
    [0.00000000101, 2.1277832928, 10050.2864675672],
    [0.00000000098, 3.89390262307, 2373.6415492642],
    [0.0000000009, 4.49046504054, 6453.7487206106],
    [0.00000000096, 5.13129666936, 7792.8670985016],
    [0.00000000089, 4.51228904794, 10037.0897512844],
    [0.00000000098, 0.65689906709, 2810.988771908],
    [0.00000000114, 4.15908543927, 9090.4741932476],
    [0.00000000094, 4.78960145866, 35707.7100829074],
    [0.00000000087, 6.26525215858, 34554.8138636676],
    [0.00000000087, 1.50181194995, 9983.7042444616],
    [0.00000000087, 1.43790822626, 9488.6231966558],
    [0.0000000009, 2.79573736864, 47477.5637760738],
    [0.00000000094, 5.68919291448, 6106.8800550648],
    [0.00000000087, 0.74049208991, 41990.7859328988],
    [0.00000000101, 0.99308133443, 6614.7374444852],
    [0.00000000115, 3.49732055752, 4.5034394172],
    [0.00000000086, 0.18628425275, 216.822213787],
    [0.00000000099, 1.06539589813, 2810.8541513024],
    [0.00000000087, 3.02856210899, 7218.029365495],
    [0.00000000085, 4.58476007089, 1699.2792165032],
    [0.00000000088, 4.47996444588, 21957.680727747],
    [0.00000000106, 6.1201188073, 4819.4790007642],
    [0.00000000089, 3.88600719587, 12199.9750023914],
    [0.00000000097, 2.70091698598, 3339.4317840477],
    [0.00000000118, 1.027395272, 34115.1140692746],
    [0.00000000101, 0.36591831115, 2942.3961129888],
    [0.00000000084, 5.66081869654, 1169.5882514086],
    [0.00000000086, 1.91214909013, 55516.4187098482],
    [0.00000000084, 4.30909434949, 4150.0898961468],
    [0.00000000094, 1.36645151323, 9093.9973115966],
    [0.00000000097, 2.26544245706, 13361.469385731],
    [0.00000000099, 1.16054562056, 128.0188433374],
    [0.00000000094, 1.10573952457, 4591.4426230006],
    [0.00000000092, 0.74386387542, 4845.9002357928],
    [0.00000000101, 1.5157029904, 7807.0941925032],
    [0.00000000096, 1.02187746571, 2899.7871418222],
    [0.00000000086, 0.66787658068, 2957.7331481288],
    [0.00000000087, 3.4967618964, 4061.751657906],
    [0.00000000095, 3.35452781355, 661.232926781],
    [0.00000000087, 0.04840436087, 23546.7536230308],
    [0.00000000114, 2.83270741566, 394.6258850592],
    [0.00000000081, 3.44420073782, 148.0787244263],
    [0.00000000081, 1.27062968985, 4893.0799566794],
    [0.00000000083, 5.48462687348, 4349.1618975832],
    [0.00000000105, 3.4784203613, 3413.9095525588],
    [0.00000000084, 4.33209852801, 51449.3242632782],
    [0.00000000093, 1.59775582035, 5088.2198048527],
    [0.00000000088, 3.29950478012, 2655.501062171],
    [0.00000000081, 1.65543714666, 78263.70942472259],
    [0.00000000086, 1.19342535692, 4029.2469095776],
    [0.00000000079, 4.41964678009, 151.0476698429],
    [0.00000000084, 1.96289182788, 14867.73751589219],
    [0.00000000091, 5.76229906142, 2544.3316735356],
    [0.00000000086, 3.78659802914, 1481.4093713452],
    [0.00000000082, 2.85633413428, 14164.8136292454],
    [0.00000000078, 4.29426812598, 187.9251477626],
    [0.00000000078, 5.38566529072, 2655.5683724738],
    [0.00000000084, 2.15121245434, 3311.1206083964],
    [0.00000000078, 2.01651247942, 9124.9219860424],
    [0.00000000083, 4.28280129037, 74923.09699802278],
    [0.00000000077, 1.45903147715, 2544.3817301862],
    [0.00000000081, 3.62204400197, 12306.590894959],
    [0.000000001, 1.33498371324, 9278.8472195668],
    [0.00000000089, 2.62080312892, 24341.5283174566],
    [0.00000000098, 3.78877505378, 3198.4337996636],
    [0.00000000081, 4.34306418828, 10177.1903692308],
    [0.0000000008, 5.80054348103, 2751.01515718],
    [0.00000000092, 2.80228448795, 3707.8367556622],
    [0.00000000082, 2.4581289624, 9815.6517316622],
    [0.00000000076, 3.03616461584, 9993.3880926316],
    [0.00000000076, 3.92674885488, 2910.0820825607],
    [0.00000000076, 3.2000404072, 7733.493236588],
    [0.00000000098, 3.28574616663, 3289.33208883739],
    [0.00000000077, 2.0594893001, 12928.7379689224],
    [0.00000000075, 0.85784191736, 28638.9055811466],
    [0.00000000078, 0.29690749181, 10654.6210194126],
    [0.00000000101, 0.72388999452, 48827.4311857326],
    [0.00000000085, 5.1943801013, 2146.148162823],
    [0.00000000083, 4.42475849926, 2060.8178540718],
    [0.00000000075, 5.19097428778, 1055.4497769261],
    [0.00000000096, 6.24132708357, 11.0457002639],
    [0.00000000074, 3.37882325472, 8006.1661939396],
    [0.00000000101, 0.95332927487, 8186.5126624926],
    [0.00000000092, 0.961730051, 151.8972810852],
    [0.00000000074, 2.2271663021, 272.6729573516],
    [0.00000000092, 5.56705883046, 27873.589010268],
    [0.00000000091, 3.73152787182, 2544.2971662312],
    [0.00000000084, 0.41493230617, 4296.9015826704],
    [0.00000000074, 5.09669613096, 9755.2302383776],
    [0.00000000078, 1.79565224435, 3564.9572224017],
    [0.00000000075, 4.58345774133, 9153.9036160218],
    [0.00000000074, 3.88658218247, 25298.2931544468],
    [0.00000000085, 5.31472029744, 4716.3862265456],
    [0.00000000074, 1.46907693289, 11527.1250891924],
    [0.00000000101, 2.94847804254, 12032.9376165392],
    [0.00000000072, 0.24413748615, 1324.94134054],
    [0.00000000078, 0.17721609024, 3391.89276456221],
    [0.00000000073, 1.65072742864, 5452.2627400774],
    [0.00000000073, 4.9173008347, 10787.6303445458],
    [0.00000000073, 3.28285909319, 8830.9133882238],
    [0.00000000081, 5.4634074205, 3856.0762977928],
    [0.00000000073, 4.61913155968, 3288.352111787],
    [0.00000000096, 5.71767221046, 206.7007372966],
    [0.0000000008, 4.47918417138, 12299.544658261],
    [0.00000000071, 4.9813032833, 12942.965062924],
    [0.00000000073, 2.86057567032, 4960.6099964294],
    [0.00000000072, 5.14120362338, 4665.5537672398],
    [0.00000000076, 0.00928867041, 6534.413166876],
    [0.0000000009, 5.38224594245, 2125.8100970764],
    [0.00000000085, 0.94196641948, 2146.1826701274],
    [0.00000000096, 0.68069708134, 10006.5848089144],
    [0.00000000073, 1.06048379839, 3866.7802734454],
    [0.00000000072, 0.84342376295, 3334.54651107],
    [0.00000000091, 5.12701600437, 3392.8727416126],
    [0.00000000076, 5.96038992872, 3482.791053736],
    [0.0000000009, 1.46230169383, 5092.169211768],
    [0.00000000071, 1.16745785331, 1574.8458012822],
    [0.00000000072, 3.86137692169, 16762.4359954126],
    [0.0000000007, 0.07310763691, 12839.8722887054],
    [0.00000000073, 0.11725123446, 10507.809332889],
    [0.00000000081, 5.86817748181, 3495.9655158312],
    [0.00000000071, 2.07963275673, 1063.3140834523],
    [0.00000000068, 3.30993028662, 4106.4054911462],
    [0.00000000069, 0.33467954461, 5.5229243074],
    [0.00000000068, 1.56404561711, 2398.5503647308],
    [0.0000000009, 2.61953849393, 3346.6783423296],
    [0.00000000068, 1.06108185791, 191.3809558088],
    [0.00000000077, 0.87794040199, 2917.9463890869],
    [0.00000000067, 0.29712068423, 12012.5822971404],
    [0.00000000067, 2.55451787747, 11567.1912630782],
    [0.00000000083, 1.82578570364, 3511.285297319],
    [0.00000000068, 2.68247854175, 20213.25474333179],
    [0.00000000086, 2.79273636804, 367.2243289624],
    [0.00000000086, 0.81171860574, 209.775977089],
    [0.00000000067, 5.28035928877, 8966.3875031733],
    [0.00000000067, 0.20258020424, 27433.88921587499],
    [0.00000000071, 2.76410148218, 15650.7937503106],
    [0.0000000009, 0.71593793107, 3451.7990689874],
    [0.00000000067, 6.18148420146, 3966.2826190122],
    [0.00000000074, 3.61959120765, 7064.1041319706],
    [0.00000000068, 2.69550405031, 12725.453434775],
    [0.00000000074, 1.24854309783, 8027.5691447094],
    [0.00000000084, 2.47006028699, 3738.7441764558],
    [0.00000000077, 5.89874180572, 4307.5833041354],
    [0.00000000067, 0.33285041428, 19645.5255567906],
    [0.00000000083, 3.79134493696, 2472.6787626222],
    [0.00000000064, 0.43216125634, 1994.26813539],
    [0.00000000071, 0.65707804543, 860.3099287528],
    [0.00000000064, 0.98960038205, 3376.1751611684],
    [0.0000000007, 0.96227192685, 8428.8322315525],
    [0.00000000066, 0.65425879867, 8219.4652893776],
    [0.0000000007, 4.36060455306, 8436.6965380787],
    [0.00000000084, 4.50083253887, 3738.7786837602],
    [0.00000000073, 5.69670871544, 14687.3910473392],
    [0.00000000071, 0.36334330253, 2619.4731954936],
    [0.0000000008, 5.85771861744, 7747.7203305896],
    [0.00000000068, 3.06409889136, 8446.9914788172],
    [0.00000000066, 1.07137364271, 1987.221898692],
    [0.00000000061, 3.71171429905, 1055.8588118402],
    [0.00000000079, 0.06487001849, 6286.5989683404],
    [0.00000000075, 1.54177744365, 1059.3991838414],
    [0.00000000061, 1.47350010728, 1685.0521225016],
    [0.00000000061, 0.46897959303, 1727.6610936682],
    [0.00000000064, 2.11869877898, 3305.0496922312],
    [0.0000000006, 1.17940250396, 97670.38771289718],
    [0.0000000006, 5.13953821352, 1898.3339642874],
    [0.00000000064, 4.04058406722, 3945.4621674046],
    [0.00000000063, 5.20562384814, 24606.13555322],
    [0.00000000061, 0.55428968913, 7082.8969751568],
    [0.00000000075, 4.81208819076, 27299.2442119332],
    [0.00000000059, 1.75511446129, 12082.6551341712],
    [0.00000000061, 5.8833385561, 6901.6374958384],
    [0.00000000074, 3.46408580786, 14556.8967170238],
    [0.00000000074, 4.40649822049, 9360.6043533184],
    [0.00000000058, 4.22827613192, 4531.5363185754],
    [0.0000000008, 2.14103357856, 7917.3005137226],
    [0.00000000075, 1.8561801142, 52566.19261584059],
    [0.00000000075, 5.1583065968, 45884.967762441],
    [0.00000000068, 2.06915254754, 8958.5231966471],
    [0.00000000056, 3.77847713307, 299.1263942692],
    [0.00000000062, 2.25564130818, 9758.7533567266],
    [0.00000000059, 2.68657637673, 6283.0585963392],
    [0.00000000056, 5.54148283448, 13286.1836355236],
    [0.00000000056, 3.892008116, 8962.3880396074],
    [0.00000000063, 2.07254352069, 7593.7950970652],
    [0.00000000061, 4.31994402891, 4709.2726795448],
    [0.00000000075, 5.79419108898, 1059.364676537],
    [0.00000000056, 0.18569912415, 7768.0083396856],
    [0.00000000059, 5.49627068572, 7322.1024607818],
    [0.00000000064, 3.9599211222, 3050.1269472302],
    [0.00000000055, 2.19506741266, 7.046236698],
    [0.00000000057, 4.052526953, 3930.2096962196],
    [0.00000000075, 3.99788100837, 5483.254724826],
    [0.0000000006, 4.61703903739, 6990.5031760554],
    [0.00000000073, 4.20362525534, 21150.8133658836],
    [0.00000000066, 2.82009591985, 8771.0070837986],
    [0.00000000054, 0.38782719267, 360.1107819616],
    [0.00000000059, 4.71734799803, 6283.0931036436],
    [0.00000000068, 5.74655335863, 987.746272928],
];

const R1: &[Term] = &[
    [0.0110743334, 2.0325052495, 3340.6124266998],
    [0.00103175886, 2.37071845682, 6681.2248533996],
    [0.000128772, 0.0, 0.0],
    [0.0001081588, 2.70888093803, 10021.8372800994],
    [0.0000119455, 3.04702182503, 13362.4497067992],
    [0.00000438579, 2.88835072628, 2281.2304965106],
    [0.00000395698, 3.42324611291, 3344.1355450488],
    [0.00000182572, 1.58428644001, 2544.3144198834],
    [0.0000013585, 3.38507017993, 16703.062133499],
    [0.00000128204, 0.6299122057, 1059.3819301892],
    [0.00000127068, 1.9538977574, 796.2980068164],
    [0.00000118443, 2.99761345074, 2146.1654164752],
    [0.00000128362, 6.04343360441, 3337.0893083508],
    [0.00000087537, 3.42052758979, 398.1490034082],
    [0.00000083026, 3.85574986653, 3738.761430108],
    [0.00000075598, 4.45101839349, 6151.533888305],
    [0.00000071999, 2.7644218068, 529.6909650946],
    [0.00000066542, 2.54892602695, 1751.539531416],
    [0.00000054314, 0.67750943459, 8962.4553499102],
    [0.00000051035, 3.72585409207, 6684.7479717486],
    [0.0000006643, 4.40597549957, 1748.016413067],
    [0.00000047863, 2.28527896843, 2914.0142358238],
    [0.00000049428, 5.72959428364, 3340.5951730476],
    [0.00000049424, 1.47717922226, 3340.629680352],
    [0.00000057518, 0.54354327916, 1194.4470102246],
    [0.00000048318, 2.58061691301, 3149.1641605882],
    [0.00000036384, 6.02728752344, 3185.1920272656],
    [0.00000037176, 5.81439911546, 1349.8674096588],
    [0.00000036036, 5.89508336048, 3333.498879699],
    [0.00000031115, 0.9783250696, 191.4482661116],
    [0.00000038953, 2.31900090554, 4136.9104335162],
    [0.00000027244, 5.41367977087, 1592.5960136328],
    [0.000000243, 3.75843924498, 155.4203994342],
    [0.00000022804, 1.74830773908, 5088.6288397668],
    [0.00000022324, 0.9393204073, 951.7184062506],
    [0.00000021708, 3.83571581352, 6283.0758499914],
    [0.00000021304, 0.78049229782, 1589.0728952838],
    [0.00000021631, 4.56895741061, 3532.0606928114],
    [0.00000017956, 4.21930481803, 3870.3033917944],
    [0.00000018237, 0.41328624131, 5486.777843175],
    [0.00000016251, 3.80760134974, 3340.545116397],
    [0.00000016803, 5.54857987615, 3097.88382272579],
    [0.0000001685, 4.53690440252, 4292.3308329504],
    [0.00000015755, 4.75736730681, 9492.1463150048],
    [0.00000015746, 3.72356090283, 20043.6745601988],
    [0.00000020428, 3.13540712557, 4690.4798363586],
    [0.00000014699, 5.95325006816, 3894.1818295422],
    [0.00000016251, 3.39910907599, 3340.6797370026],
    [0.00000014259, 3.99897353022, 1990.745017041],
    [0.00000016528, 0.96752074938, 4399.994356889],
    [0.0000001301, 5.14230107067, 6677.7017350506],
    [0.00000012492, 1.03211063742, 3341.592747768],
    [0.00000016463, 3.53882915214, 2700.7151403858],
    [0.00000016171, 2.34870953554, 553.5694028424],
    [0.00000013169, 0.41461716663, 5614.7293762096],
    [0.00000011272, 1.02375627844, 12303.06777661],
    [0.00000012408, 6.23142869816, 5628.9564702112],
    [0.00000012747, 0.69046314049, 3723.508958923],
    [0.00000011827, 6.25283898676, 2274.1169495098],
    [0.00000010384, 1.23257236014, 426.598190876],
    [0.00000011208, 1.31750963435, 3496.032826134],
    [0.00000010345, 0.9006246469, 4535.0594369244],
    [0.00000012215, 4.22316056098, 7079.3738568078],
    [0.00000009765, 3.45310940204, 382.8965322232],
    [0.00000008586, 1.16471901139, 2787.0430238574],
    [0.00000007879, 5.7380886179, 2288.3440435114],
    [0.00000009195, 1.81689739851, 6681.2421070518],
    [0.00000007751, 4.15046998466, 6041.3275670856],
    [0.00000009195, 6.06945250657, 6681.2075997474],
    [0.00000009026, 2.58210941053, 2388.8940204492],
    [0.00000006771, 0.23987737854, 11773.3768115154],
    [0.00000007087, 3.51414944377, 8031.0922630584],
    [0.00000009159, 3.9015859055, 3553.9115221378],
    [0.00000006702, 4.25572879119, 242.728603974],
    [0.00000007232, 3.70287400141, 2818.035008606],
    [0.00000006546, 0.04353472459, 2957.7158944766],
    [0.00000008781, 2.19735028572, 1221.8485663214],
    [0.0000000654, 2.11834687923, 8429.2412664666],
    [0.00000006836, 4.04512263654, 10025.3603984484],
    [0.0000000728, 4.26943100715, 2803.8079146044],
    [0.00000007676, 1.00782250264, 8432.7643848156],
    [0.00000005732, 3.13956241764, 213.299095438],
    [0.00000005344, 3.78220670098, 5092.1519581158],
    [0.00000005991, 2.96408254428, 6489.776587288],
    [0.00000005132, 3.98288453952, 7.1135470008],
    [0.00000006261, 1.90346469972, 5621.8429232104],
    [0.00000005241, 2.6709379505, 7477.522860216],
    [0.00000006261, 1.60056695152, 3347.7259737006],
    [0.00000006526, 2.76281601349, 3339.6321056316],
    [0.00000004591, 1.81986278078, 2810.9214616052],
    [0.0000000546, 4.60874445963, 3583.3410306738],
    [0.00000004733, 0.9056002634, 5099.2655051166],
    [0.00000005486, 4.91408093456, 7632.9432596502],
    [0.00000004004, 4.14067157211, 9623.6882766912],
    [0.00000003837, 0.03343295627, 7234.794256242],
    [0.00000003621, 5.76532393672, 4933.2084403326],
    [0.00000003747, 0.08778985966, 6525.8044539654],
    [0.00000003016, 3.73838855125, 6681.2921637024],
    [0.00000003975, 4.91288592965, 2942.4634232916],
    [0.00000003911, 0.67451768877, 3127.3133312618],
    [0.00000003923, 3.07703531632, 3.523118349],
    [0.00000003944, 0.53974754515, 5884.9268465832],
    [0.00000002901, 4.66281989264, 7210.9158184942],
    [0.00000002803, 1.00530177454, 7064.1213856228],
    [0.00000003153, 4.54673175664, 2487.4160449478],
    [0.00000002784, 0.05495331967, 639.897286314],
    [0.00000002759, 5.17099857257, 5828.0284716476],
    [0.00000003017, 4.14668877243, 6681.1575430968],
    [0.00000002999, 0.82918667275, 5085.038411115],
    [0.00000002677, 0.69427974692, 2699.7348193176],
    [0.00000003023, 2.59489020298, 2906.900688823],
    [0.00000002596, 1.08693013783, 4929.6853219836],
    [0.00000003126, 1.00027692782, 2118.7638603784],
    [0.00000002598, 5.01195749912, 10018.3141617504],
    [0.00000002606, 5.34420770679, 10973.55568635],
    [0.00000002779, 3.98358744953, 6467.9257579616],
    [0.0000000246, 1.52653571249, 6836.6452528338],
    [0.00000002382, 3.93610586965, 11371.7046897582],
    [0.0000000259, 5.08892664109, 12832.7587417046],
    [0.00000002201, 0.18880589605, 9595.2390892234],
    [0.00000002128, 5.69450469171, 3191.0492295652],
    [0.00000002065, 3.541331746, 1066.49547719],
    [0.00000001868, 5.0159253181, 3475.6775067352],
    [0.00000002081, 1.3027445922, 7740.6067835888],
    [0.0000000183, 5.68365327697, 3319.8370312074],
    [0.00000002022, 6.1609232806, 1744.4259844152],
    [0.00000001708, 2.21675931288, 2921.1277828246],
    [0.00000001836, 6.16477009621, 8425.6508378148],
    [0.0000000206, 6.24041853265, 6674.1113063988],
    [0.00000001735, 4.58243571826, 10419.9862835076],
    [0.00000001852, 1.36883022935, 15643.6802033098],
    [0.00000001689, 1.92829590736, 3767.2106175758],
    [0.00000001954, 0.46215988899, 10575.4066829418],
    [0.000000018, 2.3091334366, 3355.8648978848],
    [0.00000001444, 2.15042616899, 10021.8545337516],
    [0.0000000176, 5.87267582299, 3320.257107301],
    [0.00000001845, 4.06123235448, 23384.2869868986],
    [0.00000001423, 4.65085713203, 4562.4609930212],
    [0.0000000141, 1.50438410845, 3325.3599555148],
    [0.00000001444, 0.11969993808, 10021.8200264472],
    [0.00000001443, 0.55828572929, 15113.9892382152],
    [0.00000001334, 1.25483731308, 7875.6718636242],
    [0.00000001442, 1.38958943728, 6682.2051744678],
    [0.00000001606, 4.34241260905, 5331.3574437408],
    [0.00000001377, 0.1479168382, 1758.6530784168],
    [0.00000001282, 5.78533014319, 14584.2982731206],
    [0.00000001281, 1.35125896423, 10404.7338123226],
    [0.00000001471, 0.34649469321, 8969.568896911],
    [0.00000001245, 6.02681709446, 3264.3463554242],
    [0.00000001234, 1.88341938354, 10177.2576795336],
    [0.00000001552, 5.92727420332, 8439.8779318164],
    [0.00000001182, 4.18100226016, 3360.96774609859],
    [0.00000001333, 1.86551437099, 692.1576012268],
    [0.00000001189, 0.89892514263, 13916.0191096416],
    [0.00000001192, 4.30473818946, 6894.5239488376],
    [0.00000001145, 0.15197504252, 3134.4268782626],
    [0.00000001299, 1.44631688592, 6254.6266625236],
    [0.00000001494, 1.54417907271, 3361.3878221922],
    [0.00000001054, 0.67591855339, 3344.2028553516],
    [0.0000000121, 0.85117132607, 3120.199784261],
    [0.00000001061, 0.13258232364, 522.5774180938],
    [0.00000001003, 1.28021784912, 4569.574540022],
    [0.00000001012, 5.77497169905, 14314.1681130498],
    [0.00000001169, 2.99767730172, 6247.5131155228],
    [0.00000001062, 0.25467691252, 3337.021998048],
    [0.00000001032, 5.6983368362, 536.8045120954],
    [0.00000001082, 2.58016159997, 6261.7402095244],
    [0.00000000867, 1.50283829131, 6127.6554505572],
    [0.00000000953, 2.92377030638, 5729.506447149],
    [0.00000000887, 5.28743574972, 10213.285546211],
    [0.00000001108, 2.8433917189, 640.8776073822],
    [0.00000000861, 3.21491381593, 3914.9572250346],
    [0.00000001069, 0.49400181869, 11243.6858464208],
    [0.000000008, 4.64154002129, 6144.4203413042],
    [0.00000000799, 3.33215212691, 9830.3890139878],
    [0.00000001046, 4.059078777, 6158.6474353058],
    [0.00000000743, 4.9333799729, 3230.4061054804],
    [0.0000000074, 3.01511102229, 10818.1352869158],
    [0.00000000716, 2.52567242762, 5202.3582793352],
    [0.00000000705, 4.39344403231, 9808.5381846614],
    [0.00000000786, 1.72357089999, 3178.1457905676],
    [0.00000000719, 0.38924465445, 6298.3283211764],
    [0.00000000717, 6.23927283856, 3369.0616141676],
    [0.00000000704, 1.96763488855, 6688.3384004004],
    [0.00000000882, 2.10339285493, 2301.58581590939],
    [0.00000000913, 2.30662326829, 13517.8701062334],
    [0.00000000914, 4.36610748804, 13365.9728251482],
    [0.00000000659, 3.40905557071, 1648.4467571974],
    [0.00000000828, 2.13305589137, 7903.073419721],
    [0.00000000652, 5.97050449428, 574.3447983348],
    [0.00000000688, 4.02232587894, 1052.2683831884],
    [0.00000000709, 2.24658423912, 9225.539273283],
    [0.0000000059, 0.67418318613, 8955.3418029094],
    [0.00000000604, 2.73550395152, 16858.4825329332],
    [0.00000000785, 3.58704322751, 2693.601593385],
    [0.0000000057, 4.11146135269, 6034.2140200848],
    [0.00000000624, 4.45415856101, 12964.300703391],
    [0.00000000563, 3.72383942144, 13119.72110282519],
    [0.00000000547, 3.04142188931, 2707.8286873866],
    [0.00000000536, 4.65546776421, 135.0650800354],
    [0.0000000068, 3.62640859214, 6048.4411140864],
    [0.00000000535, 3.32503801413, 9779.1086761254],
    [0.00000000615, 0.31792697641, 7910.1869667218],
    [0.00000000506, 1.24339056369, 4555.3474460204],
    [0.00000000633, 1.32124830132, 2648.454825473],
    [0.00000000671, 2.88173567087, 3316.733988952],
    [0.0000000057, 4.94522781693, 6923.9534573736],
    [0.00000000489, 0.48479532469, 12935.8515159232],
    [0.0000000049, 1.57712746955, 162.4666361322],
    [0.00000000492, 4.08592823251, 10021.9045904022],
    [0.00000000468, 4.50628939729, 2384.3232707292],
    [0.00000000462, 1.30653882308, 17256.6315363414],
    [0.00000000444, 5.20556841675, 13358.9265884502],
    [0.00000000511, 5.29436707935, 853.196381752],
    [0.00000000458, 5.52316111365, 6438.4962494256],
    [0.00000000443, 4.37626774329, 12168.0026965746],
    [0.00000000429, 4.06329082027, 149.5631971346],
    [0.00000000502, 6.12188881856, 8273.8208670324],
    [0.0000000042, 3.51990468754, 9168.6408983474],
    [0.00000000452, 0.15931716927, 7895.9598727202],
    [0.00000000401, 0.93276882765, 433.7117378768],
    [0.00000000491, 4.49372643902, 10021.7699697966],
    [0.0000000039, 1.26790524143, 5459.3762870782],
    [0.0000000046, 3.56765356005, 1596.1864422846],
    [0.00000000514, 4.14617297678, 16460.33352952499],
    [0.0000000051, 2.12338136542, 3335.0895023924],
    [0.00000000365, 0.84035244694, 3364.4908644476],
    [0.00000000444, 0.42154996651, 9866.4168806652],
    [0.0000000038, 2.74315160117, 3344.4937620578],
    [0.00000000355, 2.20831807719, 5518.7501489918],
    [0.00000000374, 0.93920520997, 3863.1898447936],
    [0.0000000038, 0.60825828556, 3980.5097130138],
    [0.00000000366, 1.45297694305, 1039.0266107904],
    [0.00000000458, 5.01867719021, 10551.528245194],
    [0.00000000352, 5.59661824792, 16062.1845261168],
    [0.00000000361, 5.43698827477, 11236.57229942],
    [0.00000000323, 3.25474887566, 3116.2676309979],
    [0.00000000396, 5.43635200834, 16173.3711684044],
    [0.00000000316, 5.10862851689, 17395.2197347258],
    [0.00000000325, 4.59103320065, 19800.9459562248],
    [0.0000000032, 0.1002213259, 1692.1656695024],
    [0.00000000313, 4.76509182263, 3304.5845600224],
    [0.00000000329, 3.51515201342, 1903.4368125012],
    [0.00000000361, 1.4017957282, 8270.2977486834],
    [0.0000000038, 1.11278812152, 3503.079062832],
    [0.00000000309, 1.63585786252, 11081.2192102886],
    [0.00000000304, 6.27804875103, 2391.43681773],
    [0.00000000336, 2.95777936427, 6680.2445323314],
    [0.00000000299, 0.48751113813, 3347.6586633978],
    [0.00000000327, 3.19951479738, 3981.490034082],
    [0.00000000298, 4.26967988388, 13936.794505134],
    [0.00000000309, 5.0577507818, 12721.572099417],
    [0.0000000031, 6.10243075443, 17924.9106998204],
    [0.0000000029, 4.52880846817, 5724.935697429],
    [0.00000000279, 4.30091602167, 3607.2194684216],
    [0.00000000293, 1.90646493379, 6702.000248892],
    [0.00000000375, 5.37146136739, 3376.6402933772],
    [0.00000000268, 4.93796347898, 13760.5987102074],
    [0.00000000269, 5.63342755549, 4032.7700279266],
    [0.00000000361, 4.70448724123, 9380.9596727172],
    [0.00000000285, 4.37639190605, 6040.3472460174],
    [0.00000000305, 3.60878132297, 7255.5696517344],
    [0.00000000265, 5.82002998533, 1214.7350193206],
    [0.00000000246, 3.48844723382, 3237.5196524812],
    [0.00000000339, 6.05128485092, 6660.4494579072],
    [0.00000000325, 5.12798981834, 11250.7993934216],
    [0.00000000243, 0.48346700024, 13362.432453147],
    [0.00000000246, 4.41923388458, 3546.797975137],
    [0.00000000239, 3.73073204843, 76.2660712756],
    [0.00000000239, 6.27709788173, 1964.838626854],
    [0.00000000242, 2.51411096474, 13362.4669604514],
    [0.00000000238, 4.61745673345, 17277.4069318338],
    [0.00000000232, 3.13987850882, 20199.094959633],
    [0.00000000245, 3.88310965561, 4407.1079038898],
    [0.00000000242, 3.07232693388, 12566.1516999828],
    [0.00000000277, 3.88618268628, 10596.1820784342],
    [0.00000000277, 6.1445946998, 19402.7969528166],
    [0.00000000222, 2.20253799065, 7107.8230442756],
    [0.00000000218, 1.37621606096, 3415.3940252671],
    [0.00000000297, 3.78408680173, 2766.267628365],
    [0.00000000264, 5.35345322905, 6816.289933435],
    [0.00000000213, 1.10915354432, 19004.6479494084],
    [0.00000000213, 4.60032427636, 3973.396166013],
    [0.0000000023, 4.39356021431, 26724.8994135984],
    [0.00000000202, 0.60981942427, 6677.6344247478],
    [0.00000000268, 5.05058237041, 9381.9399937854],
    [0.00000000199, 1.34402137469, 8329.671610597],
    [0.00000000198, 5.08527311506, 5820.9149246468],
    [0.00000000201, 0.05002970566, 11780.4903585162],
    [0.00000000199, 2.66187512344, 6696.4773245846],
    [0.00000000227, 1.69939961119, 18984.2926300096],
    [0.00000000217, 4.71565260831, 8671.9698704406],
    [0.00000000199, 0.66532566162, 15664.03552270859],
    [0.00000000201, 3.90133282111, 266.6070417218],
    [0.00000000242, 0.76562027191, 3281.2385647862],
    [0.00000000254, 6.0771214653, 14054.607308026],
    [0.00000000193, 6.08798590746, 8982.810669309],
    [0.00000000202, 1.12506176909, 6684.8152820514],
    [0.00000000212, 0.41763591084, 5732.0492444298],
    [0.00000000191, 0.63315794517, 3017.1070100424],
    [0.00000000184, 5.68898048651, 5642.1982426092],
    [0.0000000018, 4.60366258431, 10235.1363755374],
    [0.00000000198, 1.01742381306, 3336.7310913418],
    [0.00000000207, 0.80702499658, 3877.4169387952],
    [0.00000000202, 1.61753574776, 11216.284290324],
    [0.00000000177, 0.20305783491, 22743.4093795164],
    [0.00000000181, 6.17864681592, 4885.9664096786],
    [0.00000000228, 0.90779655425, 18454.601664915],
    [0.00000000165, 3.97299091423, 20.3553193988],
    [0.00000000206, 3.58770221682, 3205.5473466644],
    [0.00000000185, 2.7708843606, 220.4126424388],
    [0.00000000163, 0.00569068383, 1437.1756141986],
    [0.00000000185, 6.2312887516, 6660.8695340008],
    [0.00000000164, 4.64548469502, 3253.30422216],
    [0.0000000021, 4.85590304986, 5618.3198048614],
    [0.00000000226, 1.76563729092, 5625.3660415594],
    [0.00000000163, 0.67931390118, 12310.1813236108],
    [0.00000000211, 1.51278040364, 4039.8835749274],
    [0.00000000177, 2.14779710666, 3346.1353510072],
    [0.00000000154, 3.33525296567, 9070.1188738488],
    [0.00000000178, 1.65162116131, 10713.9948813262],
    [0.00000000156, 6.12783235584, 103.0927742186],
    [0.00000000155, 3.51854579269, 7373.3824546264],
    [0.00000000157, 4.91614155659, 15508.6151232744],
    [0.00000000191, 1.74459210202, 10022.8176011676],
    [0.00000000178, 3.53665589741, 533.2140834436],
    [0.00000000154, 2.64640687885, 3333.5661900018],
    [0.00000000162, 1.2723539268, 5415.6573747732],
    [0.00000000144, 1.30886254982, 6460.8122109608],
    [0.00000000173, 3.76291627342, 3561.0250691386],
    [0.00000000144, 0.86629692094, 7380.4960016272],
    [0.0000000015, 0.23529641094, 1228.9621133222],
    [0.00000000144, 0.12285484149, 647.0108333148],
    [0.0000000016, 0.24157324936, 11614.4332937322],
    [0.00000000146, 4.76067886088, 16706.585251848],
    [0.00000000188, 2.96688973732, 2178.137722292],
    [0.00000000175, 1.66915420767, 22345.2603761082],
    [0.00000000141, 1.75571255457, 3657.0042963564],
    [0.00000000145, 0.71777671857, 6784.3176276182],
    [0.00000000138, 2.74151377335, 6546.1597733642],
    [0.00000000139, 4.12056692213, 3351.2490920496],
    [0.00000000152, 4.88528890547, 110.2063212194],
    [0.00000000134, 0.86682710306, 3603.6963500726],
    [0.0000000017, 5.54401695608, 3265.8308281325],
    [0.00000000165, 2.74557093704, 4672.6673142406],
    [0.00000000129, 0.94520493983, 419.4846438752],
    [0.00000000167, 3.43007767272, 1581.959348283],
    [0.00000000136, 3.68877945956, 13171.0014406876],
    [0.0000000016, 0.68321924763, 6475.0393049624],
    [0.00000000129, 4.46548223743, 9499.2598620056],
    [0.00000000144, 1.88085102951, 9468.267877257],
    [0.00000000149, 3.49118810274, 14158.7477136156],
    [0.00000000138, 1.92770959208, 15.252471185],
    [0.00000000172, 0.23189971635, 12323.4230960088],
    [0.00000000121, 1.75813513715, 4379.6390374902],
    [0.0000000012, 6.04299490267, 6606.4432548323],
    [0.00000000134, 1.98845453946, 8965.9784682592],
    [0.00000000118, 0.22641710036, 11766.2632645146],
    [0.00000000122, 2.92219895926, 21947.1113727],
    [0.00000000147, 5.86576524955, 3169.9395560806],
    [0.00000000121, 5.75886629308, 19513.9835951042],
    [0.00000000119, 3.93419985914, 4936.7988689844],
    [0.00000000123, 4.65853055862, 13149.1506113612],
    [0.00000000151, 4.38870879458, 13362.517017102],
    [0.00000000134, 4.49208622602, 2480.302497947],
    [0.00000000115, 5.78268772131, 12722.5524204852],
    [0.00000000126, 4.43971496486, 3568.0885594888],
    [0.00000000114, 0.36704570747, 3384.3313390048],
    [0.00000000117, 0.67607782416, 13207.029307365],
    [0.00000000124, 5.80386208894, 10721.108428327],
    [0.00000000115, 0.23672592056, 224.3447957019],
    [0.0000000011, 0.26402316132, 3077.528503327],
    [0.00000000112, 3.50979462224, 1375.7737998458],
    [0.00000000108, 5.30086016687, 10264.5658840734],
    [0.00000000146, 2.36972522432, 4989.0591838972],
    [0.00000000143, 0.92798026058, 5401.4302807716],
    [0.00000000111, 2.47771615302, 18606.4989460002],
    [0.00000000124, 1.13870545502, 2807.3983432562],
    [0.00000000105, 5.87122793977, 4193.8088084518],
    [0.00000000115, 3.01754571849, 1118.7557921028],
    [0.00000000107, 2.03274473347, 25685.872802808],
    [0.00000000107, 4.82345245872, 13362.3823964964],
    [0.00000000105, 1.21018340855, 8584.6616659008],
    [0.00000000104, 5.07527834174, 23141.5583829246],
    [0.000000001, 4.08698733114, 3511.285297319],
    [0.00000000105, 1.1383323428, 1162.4747044078],
    [0.00000000102, 2.55243872323, 664.75604513],
    [0.00000000138, 3.04361079523, 3329.97576135],
    [0.0000000013, 3.04769575195, 3341.0325027934],
    [0.00000000117, 2.97177407391, 9602.3526362242],
    [0.00000000098, 4.54292546461, 3362.4632560262],
    [0.00000000097, 2.21618504638, 10042.6126755918],
    [0.000000001, 5.4554164858, 3024.2205570432],
    [0.00000000097, 1.55448890675, 8799.988713778],
    [0.00000000107, 5.1500176439, 956.2891559706],
    [0.000000001, 1.80839732601, 6665.9723822146],
    [0.00000000104, 0.04641040148, 10001.061884607],
    [0.00000000097, 0.30502193916, 10014.7237330986],
    [0.00000000125, 3.71144870102, 3873.8265101434],
    [0.00000000102, 5.38933965862, 13892.1406718938],
    [0.00000000108, 4.3343889579, 3490.1756238344],
    [0.00000000095, 2.32591017464, 10028.9508271002],
    [0.00000000113, 1.7432394516, 11610.9101753832],
    [0.00000000119, 4.94578003013, 3443.7052009184],
    [0.00000000096, 1.63239207663, 11925.2740926006],
    [0.00000000124, 0.82697196609, 9638.9407478762],
    [0.00000000101, 1.51065535085, 1062.9050485382],
    [0.00000000107, 4.3665371608, 6531.661656265],
    [0.0000000009, 2.0153477417, 22324.9050567094],
    [0.00000000094, 4.85202869277, 14047.4937610252],
    [0.00000000089, 1.23714034226, 20809.4676246452],
    [0.00000000095, 5.69916785631, 6717.252720077],
    [0.00000000095, 2.15038299943, 8013.2797409404],
    [0.00000000111, 3.91313035726, 3311.18291816379],
    [0.00000000089, 1.37925538521, 74.7815985673],
    [0.00000000094, 3.24872875047, 6657.3464156518],
    [0.00000000089, 0.70324117212, 23.8784377478],
    [0.00000000087, 0.40376031248, 2221.856634597],
    [0.00000000092, 3.3316578619, 2540.7913015344],
    [0.0000000012, 3.09344469205, 6685.1061887576],
    [0.00000000087, 4.9269430907, 1505.28780909299],
    [0.00000000091, 1.66121998822, 24150.080051345],
    [0.0000000009, 5.47687082598, 16699.53901514999],
    [0.00000000119, 2.53709230647, 3312.163239232],
    [0.00000000118, 5.56523997231, 2814.4445799542],
    [0.00000000093, 1.61394240489, 3341.0423098265],
    [0.00000000084, 1.19439840758, 3450.8187479192],
    [0.00000000085, 4.95060410388, 7314.0085927128],
    [0.00000000084, 3.92244493446, 170.6728706192],
    [0.00000000096, 5.49205832489, 3427.9206312396],
    [0.00000000106, 1.61703818023, 3774.3241645766],
    [0.00000000101, 6.18535119914, 5511.636601991],
    [0.00000000081, 3.16562241132, 52175.8062831484],
    [0.00000000093, 5.15512549422, 3451.7990689874],
    [0.00000000108, 0.33314004399, 6709.6740408674],
    [0.00000000078, 2.38080208142, 13553.8979729108],
    [0.00000000085, 1.1858843064, 6705.1032911474],
    [0.00000000098, 3.24856024758, 25287.7237993998],
    [0.0000000008, 2.54327778068, 6675.7019290922],
    [0.00000000078, 4.70533248161, 24889.5747959916],
    [0.00000000095, 1.59916172961, 4271.9755135516],
    [0.00000000076, 0.90799171644, 2675.8563815698],
    [0.00000000091, 3.80728044706, 2125.8774073792],
    [0.00000000093, 5.59480359619, 3340.1825435731],
    [0.00000000095, 2.06299921822, 6518.7582172674],
    [0.000000001, 6.02550501045, 3313.210870603],
    [0.00000000075, 6.1609589009, 3370.0419352358],
    [0.00000000077, 4.92444879515, 3229.4257844122],
    [0.0000000009, 4.55063359845, 6701.5801727984],
    [0.00000000078, 2.01202524407, 14421.8316369884],
    [0.00000000079, 5.92142974185, 6155.057006654],
    [0.00000000101, 2.07923317336, 15265.8865193004],
    [0.00000000082, 6.04078010866, 3760.097070575],
    [0.00000000073, 3.01106366205, 206.1855484372],
    [0.00000000078, 1.71095661489, 3399.9862886134],
    [0.00000000073, 3.32824316241, 9588.1255422226],
    [0.00000000076, 1.74030672711, 6756.0064519669],
    [0.00000000073, 1.44980946324, 5408.5438277724],
    [0.00000000077, 5.64501410813, 3209.0704650134],
    [0.0000000008, 5.70272305344, 10156.9023601348],
    [0.00000000075, 3.83222347813, 39048.3225096072],
    [0.00000000072, 0.82629826575, 7366.2689076256],
    [0.00000000083, 4.71804515025, 14061.7208550268],
    [0.00000000072, 4.35767091893, 21548.9623692918],
    [0.00000000086, 1.50107043029, 5989.0672521728],
    [0.00000000073, 3.77377582806, 28628.3362260996],
    [0.00000000082, 0.7874018109, 16276.463942623],
    [0.0000000007, 2.69225539304, 3296.8935143948],
    [0.00000000069, 1.01941228196, 12295.9542296092],
    [0.00000000081, 4.64227979982, 6947.8318951214],
    [0.00000000094, 0.74502278458, 5244.049239201],
    [0.00000000067, 4.4732887165, 20206.141196331],
    [0.00000000091, 2.95968633697, 3326.3853326982],
    [0.00000000076, 2.86128350856, 8542.970706035],
    [0.00000000065, 1.31079130285, 23546.7536230308],
    [0.00000000065, 3.31422850411, 6414.6178116778],
    [0.00000000064, 3.98415414793, 3368.0139827966],
    [0.00000000065, 4.15810281695, 3340.19235060619],
    [0.00000000071, 3.82044323862, 6578.132079181],
    [0.0000000008, 1.02128994578, 7321.1221397136],
    [0.00000000064, 1.07965886113, 6944.3087767724],
    [0.00000000064, 1.20215520018, 38.1330356378],
    [0.0000000007, 5.11166911478, 9485.032768004],
    [0.00000000067, 2.22216014849, 4845.9002357928],
    [0.00000000083, 1.86067842148, 931.3630868518],
    [0.00000000063, 0.45029141698, 6418.1409300268],
    [0.00000000062, 5.68207205878, 4459.3682188026],
    [0.00000000062, 0.62454636835, 6688.2710900976],
    [0.00000000076, 0.41820625869, 5032.7780962022],
    [0.00000000062, 5.72811519809, 2008.557539159],
    [0.0000000006, 1.98790201827, 12199.9750023914],
    [0.00000000078, 2.18035217615, 3232.9489027612],
    [0.0000000006, 1.08971396071, 10124.930054318],
    [0.00000000072, 4.08555524166, 3416.8784979754],
    [0.00000000061, 2.49066420507, 4005.3684718298],
    [0.00000000059, 2.9375514437, 9886.772200064],
    [0.00000000069, 1.02371083242, 6621.850991486],
    [0.00000000061, 4.57446273568, 2277.7073781616],
    [0.00000000059, 4.7474548172, 16865.5287696312],
    [0.00000000069, 3.6257698172, 15906.7641266826],
    [0.00000000058, 4.15993379336, 1854.6323056346],
    [0.0000000006, 4.92798256747, 3391.89276456221],
    [0.0000000007, 4.51699340219, 16304.9131300908],
    [0.00000000056, 3.5935463928, 7322.1024607818],
    [0.00000000068, 0.8121709197, 16703.0448798468],
    [0.00000000056, 3.19997567622, 4140.4335518652],
    [0.00000000058, 1.73479637157, 2409.249339848],
    [0.00000000054, 5.5431093749, 2604.735913168],
    [0.00000000059, 2.0292225638, 45486.81875903279],
    [0.00000000063, 5.29505507594, 17101.2111369072],
    [0.00000000054, 4.8823066075, 48300.16010269],
    [0.00000000071, 4.843810412, 3289.33208883739],
    [0.00000000054, 1.76917054114, 3510.1926098328],
    [0.00000000063, 2.80175814276, 16894.5103996106],
    [0.00000000058, 0.91631357427, 10018.2468514476],
    [0.00000000054, 1.06826755543, 8948.2282559086],
    [0.00000000072, 1.36121375974, 10025.4277087512],
    [0.00000000061, 0.92427393171, 17468.8551979454],
    [0.00000000068, 2.84271358352, 16703.07938715119],
    [0.00000000053, 3.42679182927, 14867.73751589219],
    [0.00000000054, 0.41070672545, 18451.07854656599],
    [0.0000000006, 5.86922287544, 7447.017917846],
    [0.00000000051, 1.64684042106, 3472.1543883862],
    [0.00000000057, 6.13250399703, 17085.9586657222],
    [0.00000000053, 4.16969434701, 6106.8800550648],
    [0.0000000005, 3.17196717347, 2111.6503133776],
    [0.00000000055, 5.7260754556, 10706.8813343254],
    [0.00000000062, 0.57333106196, 3171.0322435668],
    [0.00000000053, 1.29007833025, 6652.7756659318],
    [0.0000000005, 2.96441858632, 10037.0897512844],
    [0.00000000065, 5.11165617529, 3113.1362939108],
    [0.00000000053, 4.87447079015, 1485.9801210652],
    [0.0000000005, 2.52848298042, 10448.4354709754],
    [0.00000000059, 1.69623653028, 4025.6564809258],
    [0.00000000047, 5.15559748285, 12012.5822971404],
    [0.00000000049, 1.19473362353, 3448.2759506384],
    [0.00000000063, 1.01191427607, 11769.8536931664],
    [0.00000000064, 3.86219786087, 18208.349942592],
    [0.00000000059, 2.96261275062, 14071.43950907579],
    [0.00000000049, 1.41657179779, 2938.9403049426],
    [0.00000000048, 2.95878690387, 11527.1250891924],
    [0.00000000052, 0.01971915447, 8226.5788363784],
    [0.00000000045, 5.07966377852, 3318.7615973734],
    [0.00000000043, 1.23879381294, 7218.029365495],
    [0.00000000058, 5.58121433163, 6643.0918177618],
    [0.00000000048, 5.02446939402, 6645.1969867222],
    [0.00000000043, 0.69492704598, 20995.3929664494],
    [0.00000000044, 4.02272101657, 9389.0535407862],
    [0.00000000055, 4.38138154697, 1478.8665740644],
    [0.00000000051, 4.24292455428, 792.7748884674],
    [0.00000000042, 2.74826708762, 14577.1847261198],
    [0.00000000044, 4.18397905503, 8535.8571590342],
    [0.00000000047, 1.33588473182, 632.7837393132],
    [0.00000000042, 5.05676915852, 3397.5108016354],
    [0.00000000042, 0.28204510006, 10001.48196070061],
    [0.00000000042, 0.75310918544, 6357.7194367422],
    [0.00000000042, 4.94532732982, 18052.9295431578],
    [0.00000000052, 4.09912687749, 5835.1420186484],
    [0.00000000054, 2.46533302314, 8186.5126624926],
    [0.00000000043, 4.77713978044, 32124.36905223359],
    [0.00000000053, 6.08293348275, 3377.217792004],
    [0.00000000041, 2.51168269556, 4186.695261451],
    [0.00000000041, 1.24482327948, 3212.5935833624],
    [0.00000000041, 5.42003026893, 685.044054226],
    [0.00000000041, 5.04768364997, 6571.0185321802],
    [0.00000000042, 2.08904552145, 13363.4300278674],
    [0.00000000048, 4.82888746454, 1835.3246176068],
    [0.00000000043, 4.17203713456, 43340.6533425576],
    [0.00000000046, 0.81640935106, 45884.967762441],
    [0.00000000042, 2.26773068307, 12729.665967486],
    [0.00000000039, 5.85791936573, 846.0828347512],
    [0.00000000043, 2.90976420757, 6872.6731195112],
    [0.00000000045, 1.98725045807, 1861.7458526354],
    [0.00000000045, 0.50053853542, 14128.2427712456],
    [0.00000000046, 2.86512929328, 38650.173506199],
    [0.00000000038, 3.65846461938, 29698.2875113358],
    [0.00000000039, 4.57679716458, 6901.6374958384],
    [0.00000000039, 3.85504465583, 9945.5712088238],
    [0.0000000004, 0.06127203284, 9947.0556815321],
    [0.00000000043, 5.28854105201, 3274.1250177854],
    [0.00000000047, 6.25707790441, 24606.13555322],
    [0.00000000037, 5.02115296017, 11128.9760857842],
    [0.00000000039, 1.7142191987, 7696.8878712838],
    [0.00000000037, 4.3465298512, 3283.7140517642],
    [0.00000000037, 0.05572748092, 21150.8133658836],
    [0.00000000042, 4.9787204146, 13575.7488022372],
    [0.0000000005, 4.24170332288, 7747.7203305896],
    [0.00000000037, 4.07496312186, 8646.0634802536],
    [0.00000000038, 0.44080908793, 24491.4257925834],
    [0.00000000036, 1.73681874925, 3468.6312700372],
    [0.00000000041, 5.69294900686, 26087.9031415742],
    [0.00000000036, 1.80256389689, 8756.269801473],
    [0.00000000036, 3.37374689465, 48429.2821823244],
    [0.00000000035, 0.10555289345, 8742.0427074714],
    [0.00000000041, 4.26832466355, 21000.9158907568],
    [0.00000000038, 0.73199792046, 26084.0218062162],
];

const R2: &[Term] = &[
    [0.00044242247, 0.47930603943, 3340.6124266998],
    [0.00008138042, 0.86998398093, 6681.2248533996],
    [0.00001274915, 1.22594050809, 10021.8372800994],
    [0.00000187387, 1.57298991982, 13362.4497067992],
    [0.00000040744, 1.9708017506, 3344.1355450488],
    [0.00000052396, PI, 0.0],
    [0.00000026616, 1.91665615762, 16703.062133499],
    [0.00000017825, 4.43499505333, 2281.2304965106],
    [0.00000011713, 4.5251045373, 3185.1920272656],
    [0.00000010209, 5.39143469548, 1059.3819301892],
    [0.0000000995, 0.41870577185, 796.2980068164],
    [0.00000009237, 4.53579272961, 2146.1654164752],
    [0.00000007299, 3.14218509183, 2544.3144198834],
    [0.00000007217, 2.29300859074, 6684.7479717486],
    [0.00000006808, 5.26702580055, 155.4203994342],
    [0.00000006528, 2.30781369329, 3738.761430108],
    [0.00000007785, 5.93369079547, 1748.016413067],
    [0.0000000584, 1.05191350362, 1349.8674096588],
    [0.00000006749, 5.30194395749, 1194.4470102246],
    [0.00000004695, 0.76880586144, 3097.88382272579],
    [0.00000005391, 1.00223256041, 3149.1641605882],
    [0.00000004406, 2.45556303355, 951.7184062506],
    [0.00000004286, 3.89643520638, 1592.5960136328],
    [0.00000003514, 1.85168391963, 398.1490034082],
    [0.00000003699, 2.26043707772, 20043.6745601988],
    [0.00000003377, 3.81683532672, 1751.539531416],
    [0.00000004585, 0.8078744174, 4136.9104335162],
    [0.00000003201, 2.11657635165, 5614.7293762096],
    [0.00000003622, 1.32395191387, 3333.498879699],
    [0.00000002916, 1.19337460559, 529.6909650946],
    [0.00000002979, 2.86481008776, 6151.533888305],
    [0.00000003057, 4.55276793064, 5628.9564702112],
    [0.00000002906, 1.20295377623, 3894.1818295422],
    [0.0000000385, 3.86055626689, 553.5694028424],
    [0.0000000282, 2.48683324916, 1990.745017041],
    [0.00000002657, 6.07411629964, 4292.3308329504],
    [0.000000027, 2.9213977335, 3496.032826134],
    [0.00000002395, 5.94175921617, 2787.0430238574],
    [0.00000002264, 2.56219866409, 191.4482661116],
    [0.00000002167, 5.36812435483, 8962.4553499102],
    [0.00000002149, 2.74950075397, 242.728603974],
    [0.00000002217, 1.85265984462, 3337.0893083508],
    [0.00000001996, 5.76429928131, 3341.592747768],
    [0.00000001999, 3.82349238481, 2914.0142358238],
    [0.00000001835, 5.68592723044, 1589.0728952838],
    [0.00000001812, 3.32042068028, 5088.6288397668],
    [0.00000002413, 4.68291336853, 4690.4798363586],
    [0.0000000197, 4.17480610904, 3340.5951730476],
    [0.0000000197, 6.20643855008, 3340.629680352],
    [0.00000001627, 5.67733051452, 4535.0594369244],
    [0.0000000216, 1.07452599834, 2388.8940204492],
    [0.00000001964, 3.10805316088, 3583.3410306738],
    [0.00000001985, 5.7585035184, 4399.994356889],
    [0.00000001507, 4.95936409838, 382.8965322232],
    [0.00000001278, 4.82232889938, 2957.7158944766],
    [0.00000001475, 2.22707926559, 3723.508958923],
    [0.00000001196, 3.2672445892, 9492.1463150048],
    [0.00000001349, 4.87573224485, 6525.8044539654],
    [0.00000001433, 2.69734916443, 7079.3738568078],
    [0.00000001224, 2.62012336714, 10025.3603984484],
    [0.00000001404, 5.19056026479, 2700.7151403858],
    [0.00000001202, 0.93472783088, 2810.9214616052],
    [0.00000000869, 5.81340811635, 12303.06777661],
    [0.00000000867, 2.20046640409, 2699.7348193176],
    [0.0000000083, 2.01484544773, 5092.1519581158],
    [0.00000000855, 5.96220147975, 426.598190876],
    [0.00000000848, 2.26407047301, 6283.0758499914],
    [0.00000000917, 1.40295785881, 6489.776587288],
    [0.00000000833, 1.17384197174, 7477.522860216],
    [0.00000001041, 6.27171470048, 3347.7259737006],
    [0.00000000965, 3.39855816541, 5621.8429232104],
    [0.00000000722, 4.26304776331, 4933.2084403326],
    [0.00000000706, 2.34131594714, 7.1135470008],
    [0.00000000768, 2.06208352904, 5486.777843175],
    [0.00000000953, 2.11123497948, 3870.3033917944],
    [0.00000000844, 2.2393196324, 3553.9115221378],
    [0.00000000646, 2.24669034469, 3340.545116397],
    [0.00000000653, 3.99043329363, 6677.7017350506],
    [0.00000000714, 0.29739480601, 6681.2421070518],
    [0.00000000828, 0.2286361767, 3532.0606928114],
    [0.00000000612, 1.55388376751, 7234.794256242],
    [0.00000000714, 4.54969883976, 6681.2075997474],
    [0.00000000586, 3.30118433303, 1221.8485663214],
    [0.00000000646, 1.83853693231, 3340.6797370026],
    [0.0000000056, 5.05848353328, 8031.0922630584],
    [0.00000000651, 0.1589747216, 7632.9432596502],
    [0.00000000488, 3.08086378649, 6836.6452528338],
    [0.00000000534, 4.25727954634, 3339.6321056316],
    [0.00000000504, 2.59990772815, 23384.2869868986],
    [0.00000000372, 6.27186983164, 2487.4160449478],
    [0.00000000343, 4.71059403854, 639.897286314],
    [0.00000000449, 1.34123846614, 640.8776073822],
    [0.00000000342, 5.96338023755, 4929.6853219836],
    [0.00000000329, 2.6595525877, 9623.6882766912],
    [0.00000000352, 6.09567212646, 7740.6067835888],
    [0.00000000326, 6.05498346093, 2118.7638603784],
    [0.00000000403, 4.96465831103, 8969.568896911],
    [0.00000000402, 2.84624835384, 5331.3574437408],
    [0.00000000319, 1.44545457475, 5729.506447149],
    [0.00000000303, 0.01918776551, 6127.6554505572],
    [0.00000000297, 5.74070606294, 6041.3275670856],
    [0.00000000297, 3.06763224975, 10419.9862835076],
    [0.00000000282, 6.04069352017, 7875.6718636242],
    [0.00000000278, 5.11654962157, 11773.3768115154],
    [0.00000000259, 2.89786343627, 7210.9158184942],
    [0.00000000273, 3.83181794308, 8429.2412664666],
    [0.00000000256, 1.08862226474, 2288.3440435114],
    [0.00000000288, 6.1357268768, 6682.2051744678],
    [0.00000000302, 3.61490647715, 12832.7587417046],
    [0.00000000235, 2.21413387615, 6681.2921637024],
    [0.00000000317, 3.60634897209, 2301.58581590939],
    [0.00000000289, 5.08223311018, 2274.1169495098],
    [0.00000000254, 0.36603904729, 3767.2106175758],
    [0.00000000235, 2.6243448155, 6681.1575430968],
    [0.00000000226, 3.45305949713, 6923.9534573736],
    [0.00000000205, 3.88943452829, 10018.3141617504],
    [0.00000000206, 3.44453113177, 10177.2576795336],
    [0.0000000021, 0.57926734389, 10973.55568635],
    [0.00000000194, 1.57870686859, 10818.1352869158],
    [0.0000000019, 2.42312911773, 8955.3418029094],
    [0.00000000194, 2.45887376159, 7064.1213856228],
    [0.00000000193, 0.58793888724, 5828.0284716476],
    [0.00000000183, 1.68247271963, 213.299095438],
    [0.00000000236, 1.98863774162, 10575.4066829418],
    [0.00000000245, 2.17761779228, 4562.4609930212],
    [0.00000000177, 0.66379705293, 10021.8545337516],
    [0.00000000176, 4.91607557961, 10021.8200264472],
    [0.00000000217, 2.93968443649, 13365.9728251482],
    [0.00000000167, 4.74764434327, 3914.9572250346],
    [0.00000000213, 0.15734917857, 2942.4634232916],
    [0.00000000155, 1.78776991092, 9830.3890139878],
    [0.0000000018, 5.21088564787, 9866.4168806652],
    [0.00000000161, 5.1768386138, 6298.3283211764],
    [0.00000000159, 2.6898068485, 6894.5239488376],
    [0.00000000149, 6.26524493469, 1039.0266107904],
    [0.00000000147, 0.36939961702, 6688.3384004004],
    [0.00000000151, 1.2227289229, 574.3447983348],
    [0.00000000137, 2.09492296067, 1066.49547719],
    [0.00000000165, 6.15952050903, 15643.6802033098],
    [0.00000000163, 4.66507592292, 8273.8208670324],
    [0.00000000124, 0.67855210339, 6438.4962494256],
    [0.00000000128, 1.69206367749, 3981.490034082],
    [0.00000000116, 2.78191248964, 3360.96774609859],
    [0.00000000128, 0.84461423001, 3355.8648978848],
    [0.00000000124, 1.63253732557, 6674.1113063988],
    [0.0000000012, 0.31762150109, 3127.3133312618],
    [0.00000000129, 2.26678583645, 6467.9257579616],
    [0.00000000104, 0.07355376701, 3325.3599555148],
    [0.0000000013, 4.4177719083, 3320.257107301],
    [0.00000000095, 1.31957248342, 7903.073419721],
    [0.00000000114, 0.65681602343, 3178.1457905676],
    [0.00000000092, 4.98392367746, 9779.1086761254],
    [0.00000000101, 4.10670787374, 536.8045120954],
    [0.00000000106, 5.41622566807, 15113.9892382152],
    [0.00000000096, 3.52561014696, 3475.6775067352],
    [0.00000000101, 2.91169549546, 692.1576012268],
    [0.00000000093, 3.21464368291, 8671.9698704406],
    [0.00000000087, 5.24375873119, 13119.72110282519],
    [0.00000000106, 3.76804681559, 13517.8701062334],
    [0.00000000089, 5.73652101746, 11371.7046897582],
    [0.00000000104, 5.90078964406, 8432.7643848156],
    [0.00000000099, 3.61425346453, 853.196381752],
    [0.00000000078, 0.95802015551, 3191.0492295652],
    [0.00000000089, 2.50872076312, 1052.2683831884],
    [0.00000000078, 2.98115354616, 26724.8994135984],
    [0.00000000079, 5.9151499393, 6040.3472460174],
    [0.0000000009, 3.00950470302, 12964.300703391],
    [0.00000000075, 1.31512531841, 17924.9106998204],
    [0.00000000073, 5.01153593776, 1903.4368125012],
    [0.00000000075, 2.57969241717, 10021.9045904022],
    [0.00000000073, 4.09954161905, 3319.8370312074],
    [0.0000000007, 5.37678396256, 12310.1813236108],
    [0.00000000071, 0.9842299824, 13362.4669604514],
    [0.00000000068, 4.69140248943, 522.5774180938],
    [0.00000000068, 3.24217441291, 16706.585251848],
    [0.00000000069, 2.53964193741, 5884.9268465832],
    [0.0000000007, 2.38237948321, 13916.0191096416],
    [0.00000000066, 3.48443797546, 13760.5987102074],
    [0.00000000068, 5.27435069681, 3980.5097130138],
    [0.00000000076, 0.12288413214, 11216.284290324],
    [0.00000000073, 3.94785759909, 16173.3711684044],
    [0.00000000062, 0.15518975647, 11081.2192102886],
    [0.00000000074, 2.99926779692, 10021.7699697966],
    [0.0000000008, 6.18812323827, 9380.9596727172],
    [0.00000000064, 3.99294283669, 13358.9265884502],
    [0.00000000061, 2.56817782412, 149.5631971346],
    [0.00000000059, 3.80850908229, 10264.5658840734],
    [0.0000000006, 4.79879360562, 1437.1756141986],
    [0.00000000068, 2.07515658228, 1596.1864422846],
    [0.0000000006, 2.26503107747, 28628.3362260996],
    [0.00000000058, 6.10782258899, 5459.3762870782],
    [0.00000000063, 0.24407077742, 18984.2926300096],
    [0.00000000058, 5.22738430747, 13362.432453147],
    [0.00000000056, 1.88708253797, 9070.1188738488],
    [0.00000000055, 5.72587156499, 433.7117378768],
    [0.00000000056, 1.18238857561, 6696.4773245846],
    [0.00000000062, 3.98214740104, 3427.9206312396],
    [0.00000000056, 5.37129176649, 5099.2655051166],
    [0.00000000057, 0.86204712032, 5642.1982426092],
    [0.00000000055, 1.31787605222, 8982.810669309],
    [0.00000000056, 5.49808236951, 24093.2767891752],
    [0.00000000054, 3.77562154746, 10213.285546211],
    [0.00000000054, 2.36294643031, 33716.9650658664],
    [0.00000000063, 3.53402427573, 3205.5473466644],
    [0.00000000066, 6.25810929981, 8270.2977486834],
    [0.00000000067, 0.5859281308, 3335.0895023924],
    [0.00000000055, 4.74995645767, 6660.8695340008],
    [0.00000000053, 0.31930032532, 12721.572099417],
    [0.00000000069, 2.42905593362, 6158.6474353058],
    [0.00000000055, 5.03192783121, 7255.5696517344],
    [0.00000000051, 5.45351947711, 13207.029307365],
    [0.0000000005, 0.23368526162, 4379.6390374902],
    [0.00000000053, 2.1282634402, 13171.0014406876],
    [0.00000000049, 2.35512151368, 4032.7700279266],
    [0.00000000049, 2.8177305089, 9808.5381846614],
    [0.00000000067, 2.26295786556, 2766.267628365],
    [0.00000000049, 0.72597680486, 10028.9508271002],
    [0.0000000005, 6.1011945035, 3253.30422216],
    [0.00000000059, 0.27861398526, 9225.539273283],
    [0.00000000053, 1.27330874549, 3344.4937620578],
    [0.00000000049, 2.91499389416, 10404.7338123226],
    [0.00000000047, 0.48598973231, 17395.2197347258],
    [0.00000000049, 3.40240207389, 3304.5845600224],
    [0.0000000006, 3.40554368741, 10551.528245194],
    [0.0000000005, 1.83471955355, 30376.3526391666],
    [0.00000000046, 3.04980996832, 6144.4203413042],
    [0.00000000049, 0.33200904496, 6702.000248892],
    [0.00000000053, 0.35820094732, 9468.267877257],
    [0.0000000005, 0.15378507249, 2648.454825473],
    [0.00000000044, 0.79762157297, 7107.8230442756],
    [0.0000000005, 2.41332661328, 4407.1079038898],
    [0.00000000054, 0.21682940856, 10022.8176011676],
    [0.00000000044, 5.78502737591, 3364.4908644476],
    [0.00000000044, 0.75508636274, 16062.1845261168],
    [0.00000000043, 3.10581037685, 10235.1363755374],
    [0.00000000044, 5.21252098878, 7373.3824546264],
    [0.00000000058, 4.51680312444, 6660.4494579072],
    [0.00000000043, 0.15523355839, 1505.28780909299],
    [0.00000000055, 5.93371026829, 8439.8779318164],
    [0.00000000042, 5.40417232308, 3344.2028553516],
    [0.00000000056, 3.87534582911, 6816.289933435],
    [0.00000000049, 5.57153056447, 17468.8551979454],
    [0.00000000046, 3.07783299049, 12722.5524204852],
    [0.00000000045, 1.49303542795, 6247.5131155228],
    [0.00000000055, 6.26098836404, 3361.3878221922],
    [0.00000000042, 4.74455545491, 3369.0616141676],
    [0.0000000004, 1.58676666294, 2818.035008606],
    [0.00000000043, 4.97295184315, 3337.021998048],
    [0.00000000055, 3.8021563852, 3376.6402933772],
    [0.00000000047, 1.97367775421, 1581.959348283],
    [0.00000000045, 2.03598705348, 5244.049239201],
    [0.00000000049, 4.43182954044, 9595.2390892234],
    [0.00000000043, 0.38914582094, 6665.9723822146],
    [0.0000000004, 1.06953099245, 23695.127785767],
    [0.00000000038, 0.59996214864, 10713.9948813262],
    [0.00000000039, 3.79055778605, 33318.8160624582],
    [0.00000000041, 5.54542347834, 3863.1898447936],
    [0.00000000037, 5.27208151144, 20752.6643624754],
    [0.00000000039, 3.15412760412, 14469.588512484],
    [0.00000000041, 0.55705920174, 3346.1353510072],
    [0.00000000048, 1.42210748234, 3316.733988952],
    [0.00000000049, 5.44942247991, 9638.9407478762],
    [0.00000000038, 2.11846271943, 15664.03552270859],
    [0.00000000035, 5.30782933148, 6677.6344247478],
    [0.00000000036, 2.68151450016, 8584.6616659008],
    [0.00000000046, 3.09450395763, 6701.5801727984],
    [0.00000000038, 1.81885395671, 14158.7477136156],
    [0.00000000037, 5.80483071722, 6684.8152820514],
    [0.00000000047, 2.60317702777, 162.4666361322],
    [0.00000000038, 2.22559377525, 3503.079062832],
    [0.00000000035, 0.84358942718, 6518.7582172674],
    [0.00000000033, 4.92302322062, 23141.5583829246],
    [0.00000000043, 0.95148893985, 34115.1140692746],
    [0.00000000046, 4.99457196207, 9381.9399937854],
    [0.00000000043, 1.73832102244, 12323.4230960088],
    [0.00000000032, 2.92741580696, 9499.2598620056],
    [0.00000000043, 1.50296327105, 27035.7402124668],
    [0.00000000033, 5.41731109688, 20597.2439630412],
    [0.00000000032, 4.13881058425, 31570.7996493912],
    [0.0000000004, 5.8446306918, 16460.33352952499],
    [0.00000000035, 5.50083743557, 8425.6508378148],
    [0.00000000038, 5.91991985929, 3336.7310913418],
    [0.0000000003, 5.09155042811, 5085.038411115],
    [0.00000000031, 4.27211180916, 36659.428489158],
    [0.0000000003, 4.87389489592, 1692.1656695024],
    [0.0000000003, 3.75494646937, 4845.9002357928],
    [0.00000000034, 3.71030605417, 8827.3902698748],
    [0.0000000003, 0.0159945685, 11243.6858464208],
    [0.00000000029, 2.66198696023, 12295.9542296092],
    [0.00000000028, 3.12114207206, 11925.2740926006],
    [0.00000000036, 1.16568750904, 18052.9295431578],
    [0.00000000032, 1.72704226918, 12566.1516999828],
    [0.00000000028, 2.80254457895, 3607.2194684216],
    [0.00000000032, 4.04390839531, 6680.2445323314],
    [0.00000000027, 2.53565904393, 19004.6479494084],
    [0.00000000036, 3.33518515689, 29978.2036357584],
    [0.00000000028, 0.58104982217, 20354.5153590672],
    [0.00000000029, 5.85207825749, 31172.650645983],
    [0.00000000026, 2.22598820379, 3.523118349],
    [0.00000000033, 5.15903548241, 10596.1820784342],
    [0.00000000028, 1.89792803028, 3333.5661900018],
    [0.00000000027, 2.25129832716, 76.2660712756],
    [0.00000000026, 4.32703172263, 17085.9586657222],
    [0.00000000026, 5.12847780702, 11766.2632645146],
    [0.00000000028, 0.80926596905, 20735.83216142559],
    [0.00000000026, 5.06814803493, 17412.0519357756],
    [0.00000000024, 4.473991556, 3134.4268782626],
    [0.00000000024, 4.35557152695, 14584.2982731206],
    [0.00000000027, 4.98717355201, 3877.4169387952],
    [0.00000000025, 5.63712701265, 14054.607308026],
    [0.00000000024, 4.12573657295, 4193.8088084518],
    [0.00000000025, 1.40880282063, 8186.5126624926],
    [0.00000000024, 4.96463811748, 26087.9031415742],
];

const R3: &[Term] = &[
    [0.00001113107, 5.14987350142, 3340.6124266998],
    [0.00000424446, 5.61343766478, 6681.2248533996],
    [0.00000100044, 5.99726827028, 10021.8372800994],
    [0.00000019606, 0.07633062094, 13362.4497067992],
    [0.00000003477, 0.42951907576, 16703.062133499],
    [0.00000004693, PI, 0.0],
    [0.00000002869, 0.44711842697, 3344.1355450488],
    [0.00000002428, 3.02115527957, 3185.1920272656],
    [0.00000000688, 0.80693359444, 6684.7479717486],
    [0.0000000054, 3.86836515672, 1059.3819301892],
    [0.00000000577, 0.7785327512, 20043.6745601988],
    [0.00000000468, 4.52450786544, 3496.032826134],
    [0.00000000487, 1.60862391345, 3583.3410306738],
    [0.00000000362, 4.42397903418, 2787.0430238574],
    [0.00000000397, 5.71967986581, 3149.1641605882],
    [0.00000000299, 0.75640033535, 3738.761430108],
    [0.0000000035, 5.55691984889, 4136.9104335162],
    [0.00000000314, 3.37632898783, 6525.8044539654],
    [0.00000000233, 2.13965262306, 3097.88382272579],
    [0.00000000212, 4.20487494011, 3341.592747768],
    [0.00000000214, 0.56779556947, 155.4203994342],
    [0.00000000201, 2.35284464564, 1592.5960136328],
    [0.00000000204, 0.96723315302, 1990.745017041],
    [0.0000000023, 5.82959057146, 2388.8940204492],
    [0.0000000016, 4.14974194757, 4535.0594369244],
    [0.00000000156, 5.13345210285, 796.2980068164],
    [0.00000000146, 3.29541339704, 2957.7158944766],
    [0.00000000156, 1.13805508457, 10025.3603984484],
    [0.00000000159, 3.76174286126, 1194.4470102246],
    [0.00000000136, 5.58293924642, 3894.1818295422],
    [0.00000000145, 3.02112488974, 3337.0893083508],
    [0.00000000146, 4.25359617225, 4399.994356889],
    [0.000000001, 4.26740096115, 1589.0728952838],
    [0.00000000091, 6.12108227231, 6489.776587288],
    [0.00000000101, 1.17242141914, 7079.3738568078],
    [0.00000000098, 1.12613498307, 23384.2869868986],
    [0.00000000075, 6.02182689533, 529.6909650946],
    [0.00000000078, 5.93418069229, 7477.522860216],
    [0.00000000068, 1.70775041911, 9492.1463150048],
    [0.0000000007, 3.67253155189, 8962.4553499102],
    [0.00000000062, 4.14954627063, 4292.3308329504],
    [0.00000000067, 0.1509224655, 3870.3033917944],
    [0.00000000066, 1.12578506413, 6151.533888305],
    [0.00000000062, 1.93984222091, 6923.9534573736],
    [0.0000000006, 4.30641513096, 12303.06777661],
    [0.00000000074, 4.72156358149, 3347.7259737006],
    [0.00000000055, 2.75742802464, 4933.2084403326],
    [0.00000000053, 4.77894621871, 6127.6554505572],
    [0.0000000005, 2.57807944338, 3340.5951730476],
    [0.00000000048, 3.72532068729, 9866.4168806652],
    [0.00000000042, 6.15391373101, 7234.794256242],
    [0.00000000043, 3.43955584179, 5486.777843175],
    [0.0000000005, 4.60885064189, 3340.629680352],
    [0.00000000044, 4.47943289816, 426.598190876],
    [0.00000000045, 6.244852075, 2274.1169495098],
    [0.0000000004, 0.73805316471, 7.1135470008],
    [0.00000000038, 1.06497784748, 9623.6882766912],
    [0.00000000041, 4.60954640493, 6682.2051744678],
    [0.00000000038, 4.60963924082, 7740.6067835888],
    [0.00000000036, 3.15129246169, 639.897286314],
    [0.00000000037, 6.14629970622, 5729.506447149],
    [0.0000000004, 1.4739554485, 13365.9728251482],
    [0.00000000035, 2.60772245492, 4690.4798363586],
    [0.00000000035, 2.450779319, 2288.3440435114],
    [0.00000000034, 4.50544497582, 7875.6718636242],
    [0.00000000042, 2.11383330882, 12832.7587417046],
    [0.00000000033, 3.97655860802, 191.4482661116],
    [0.00000000032, 4.06047154083, 3532.0606928114],
    [0.00000000034, 5.06671994554, 6681.2421070518],
    [0.00000000042, 4.67024017441, 15643.6802033098],
    [0.00000000036, 0.29140871479, 3723.508958923],
    [0.00000000033, 4.52588149629, 4929.6853219836],
    [0.00000000034, 2.7449907289, 6677.7017350506],
    [0.0000000003, 1.57743012295, 10419.9862835076],
    [0.0000000004, 1.31713176335, 5331.3574437408],
    [0.00000000034, 3.03490000148, 6681.2075997474],
    [0.00000000031, 1.25306164576, 242.728603974],
    [0.00000000029, 5.44118048011, 10021.8545337516],
    [0.00000000029, 3.41037097794, 10021.8200264472],
    [0.00000000028, 4.81855060968, 6836.6452528338],
    [0.00000000028, 0.72745302325, 6283.0758499914],
    [0.0000000003, 3.06267495632, 2281.2304965106],
    [0.00000000027, 0.62535799761, 6681.2921637024],
    [0.0000000003, 3.56389476096, 8969.568896911],
    [0.00000000032, 5.31078691958, 553.5694028424],
    [0.00000000033, 2.00753799963, 5884.9268465832],
    [0.00000000027, 1.18001479303, 8955.3418029094],
    [0.00000000025, 2.94122791628, 2544.3144198834],
    [0.00000000025, 0.17808889827, 9830.3890139878],
    [0.00000000031, 5.73384204593, 3339.6321056316],
    [0.00000000028, 3.70436008855, 6298.3283211764],
    [0.00000000024, 0.07739730466, 10818.1352869158],
    [0.00000000027, 1.03401737006, 6681.1575430968],
    [0.00000000024, 0.09987383242, 382.8965322232],
    [0.00000000027, 0.60053652251, 3553.9115221378],
    [0.00000000027, 4.97107900859, 3767.2106175758],
    [0.00000000024, 3.36621347824, 8031.0922630584],
    [0.00000000026, 4.80509833364, 7632.9432596502],
    [0.00000000022, 1.43966107077, 26724.8994135984],
    [0.0000000002, 0.36901153144, 398.1490034082],
    [0.00000000019, 1.00325306041, 7064.1213856228],
    [0.0000000002, 0.19821371186, 6674.1113063988],
    [0.00000000018, 1.07169297658, 7210.9158184942],
    [0.00000000021, 2.6951214034, 10018.3141617504],
    [0.00000000023, 3.25670295081, 5621.8429232104],
    [0.00000000018, 0.24542781929, 3981.490034082],
    [0.00000000018, 5.14428605713, 6688.3384004004],
    [0.0000000002, 0.97539014916, 6894.5239488376],
    [0.00000000024, 4.42156401638, 1748.016413067],
    [0.00000000016, 0.6538950344, 3340.545116397],
    [0.00000000016, 5.28427106012, 3333.498879699],
];

const R4: &[Term] = &[
    [0.00000019552, 3.58211650473, 3340.6124266998],
    [0.00000016323, 4.05116076923, 6681.2248533996],
    [0.00000005848, 4.46383962094, 10021.8372800994],
    [0.00000001532, 4.84374321619, 13362.4497067992],
    [0.00000000375, 1.50962233608, 3185.1920272656],
    [0.00000000339, 5.20684967613, 16703.062133499],
    [0.00000000151, 5.16472931648, 3344.1355450488],
    [0.00000000125, 2.19233532803, 3496.032826134],
    [0.00000000148, 0.0, 0.0],
    [0.00000000087, 0.10275067375, 3583.3410306738],
    [0.0000000007, 5.55303619365, 20043.6745601988],
    [0.00000000048, 2.91797786512, 2787.0430238574],
    [0.00000000049, 5.5703851483, 6684.7479717486],
    [0.00000000057, 1.86867280743, 6525.8044539654],
    [0.00000000034, 3.63370917313, 3097.88382272579],
    [0.00000000021, 2.30677637991, 1059.3819301892],
    [0.00000000021, 4.03682122005, 4136.9104335162],
    [0.00000000018, 4.1743875589, 3149.1641605882],
    [0.00000000013, 1.97805475719, 155.4203994342],
    [0.00000000017, 5.9485641469, 10025.3603984484],
    [0.00000000012, 0.51097435253, 6923.9534573736],
    [0.00000000012, 3.27945299261, 6127.6554505572],
    [0.00000000013, 2.22938285522, 9866.4168806652],
    [0.00000000016, 2.64206771227, 4399.994356889],
    [0.00000000013, 2.75813969974, 6836.6452528338],
    [0.00000000013, 4.51988349676, 6489.776587288],
    [0.00000000014, 0.76591550754, 3894.1818295422],
    [0.00000000011, 5.47381242145, 3738.761430108],
];

pub static MARS: Vsop87Table = Vsop87Table {
    variables: Variables::Spherical,
    reference: Reference::EclipticOfDate,
    series: [
        &[L0, L1, L2, L3, L4, L5],
        &[B0, B1, B2, B3, B4, B5],
        &[R0, R1, R2, R3, R4],
    ],
};
